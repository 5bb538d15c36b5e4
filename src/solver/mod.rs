use crate::prelude::*;

use enum_iterator::Sequence;
use smallvec::SmallVec;

mod first_layer;
mod last_layer;
mod middle_layer;

mod policy;
pub use policy::*;

pub trait Solver: Sized {
    fn solve(&self, cube: Cube) -> Solution;
}

/// Beginner's layer-by-layer method. Best effort: every phase is capped by the
/// [`AttemptPolicy`] and the final cube is not guaranteed to be solved.
#[derive(Debug, Clone, Default)]
pub struct LayerSolver {
    policy: AttemptPolicy,
}

impl LayerSolver {
    pub fn new(policy: AttemptPolicy) -> LayerSolver {
        LayerSolver { policy }
    }

    /// Scrambles a fresh cube and solves it. The scramble is not part of the
    /// returned move log.
    pub fn solve_scramble(&self, scramble: &[Move]) -> Solution {
        self.solve(Cube::solved().apply_all(scramble.iter().copied()))
    }
}

impl Solver for LayerSolver {
    fn solve(&self, cube: Cube) -> Solution {
        let mut session = Session::new(cube);
        let mut phases = SmallVec::new();

        for phase in enum_iterator::all::<Phase>() {
            log::info!("Starting {}", phase);
            let before = session.moves.len();
            let outcome = phase.run(&mut session, &self.policy);
            let moves = session.moves.len() - before;

            match outcome {
                Outcome::Exhausted => {
                    log::warn!("{} still incomplete after {} moves", phase, moves)
                }
                Outcome::Succeeded | Outcome::Applied => {
                    log::info!("{} {} in {} moves", phase, outcome, moves)
                }
            }
            phases.push(PhaseReport {
                phase,
                outcome,
                moves,
            });
        }

        let solved = session.cube.is_solved();
        if solved {
            log::info!("Cube solved in {} moves", session.moves.len());
        } else {
            log::warn!("Cube not solved after {} moves", session.moves.len());
        }

        Solution {
            cube: session.cube,
            moves: session.moves,
            phases,
            solved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    /// State after the last phase.
    pub cube: Cube,
    /// Every move the solver applied, in order.
    pub moves: Vec<Move>,
    pub phases: SmallVec<[PhaseReport; 7]>,
    /// Whether `cube` is solved. Authoritative over the phase outcomes.
    pub solved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub outcome: Outcome,
    pub moves: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// Ran out of attempts before its goal held.
    Exhausted,
    /// Non-adaptive phase; applied without checking the state.
    Applied,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Exhausted => "exhausted attempts",
            Outcome::Applied => "applied",
        };
        f.pad(s)
    }
}

/// Solving phases in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Phase {
    WhiteCross,
    WhiteCorners,
    MiddleLayer,
    YellowCross,
    YellowCornerPosition,
    YellowCornerOrientation,
    FinalEdges,
}

impl Phase {
    fn run(self, session: &mut Session, policy: &AttemptPolicy) -> Outcome {
        match self {
            Phase::WhiteCross => first_layer::white_cross(session, policy),
            Phase::WhiteCorners => first_layer::white_corners(session, policy),
            Phase::MiddleLayer => middle_layer::middle_layer(session, policy),
            Phase::YellowCross => last_layer::yellow_cross(session, policy),
            Phase::YellowCornerPosition => last_layer::position_corners(session),
            Phase::YellowCornerOrientation => last_layer::orient_corners(session, policy),
            Phase::FinalEdges => last_layer::final_edges(session),
        }
    }

    /// Most moves this phase can emit under `policy`.
    pub fn max_moves(self, policy: &AttemptPolicy) -> usize {
        match self {
            Phase::WhiteCross => first_layer::cross_move_limit(policy),
            Phase::WhiteCorners => first_layer::corner_move_limit(policy),
            Phase::MiddleLayer => middle_layer::move_limit(policy),
            Phase::YellowCross => last_layer::cross_move_limit(policy),
            Phase::YellowCornerPosition => last_layer::POSITION_MOVES,
            Phase::YellowCornerOrientation => last_layer::orientation_move_limit(policy),
            Phase::FinalEdges => last_layer::FINAL_EDGE_MOVES,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Phase::WhiteCross => "white cross",
            Phase::WhiteCorners => "white corners",
            Phase::MiddleLayer => "middle layer",
            Phase::YellowCross => "yellow cross",
            Phase::YellowCornerPosition => "yellow corner positioning",
            Phase::YellowCornerOrientation => "yellow corner orientation",
            Phase::FinalEdges => "final edge permutation",
        };
        f.pad(s)
    }
}

/// The cube being solved plus the log of every move applied to it.
struct Session {
    cube: Cube,
    moves: Vec<Move>,
}

impl Session {
    fn new(cube: Cube) -> Session {
        Session {
            cube,
            moves: Vec::new(),
        }
    }

    fn turn(&mut self, move_: Move) {
        log::debug!("{}", move_);
        self.cube.rotate(move_);
        self.moves.push(move_);
    }

    fn apply(&mut self, moves: &[Move]) {
        for &m in moves {
            self.turn(m);
        }
    }

    fn get(&self, sticker: Sticker) -> Color {
        self.cube.get(sticker)
    }

    fn center(&self, face: Face) -> Color {
        self.cube.face(face).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    lazy_static::lazy_static! {
        static ref SAMPLE: Vec<Move> = Move::parse_sequence(SAMPLE_SCRAMBLE).unwrap();
        static ref SAMPLE_SOLUTION: Solution = LayerSolver::default().solve_scramble(&SAMPLE);
    }

    fn replay(scramble: &[Move], solution: &Solution) -> Cube {
        Cube::solved().apply_all(scramble.iter().chain(&solution.moves).copied())
    }

    #[test]
    fn sample_replay_matches() {
        assert_eq!(replay(&SAMPLE, &SAMPLE_SOLUTION), SAMPLE_SOLUTION.cube);
    }

    #[test]
    fn sample_reports_solved_status() {
        assert_eq!(SAMPLE_SOLUTION.solved, SAMPLE_SOLUTION.cube.is_solved());
    }

    #[test]
    fn sample_stays_under_ceiling() {
        assert!(SAMPLE_SOLUTION.moves.len() <= AttemptPolicy::default().move_ceiling());
    }

    #[test]
    fn every_phase_reports_in_order() {
        let phases = SAMPLE_SOLUTION
            .phases
            .iter()
            .map(|report| report.phase)
            .collect::<Vec<_>>();
        assert_eq!(phases, enum_iterator::all::<Phase>().collect::<Vec<_>>());

        let total: usize = SAMPLE_SOLUTION.phases.iter().map(|r| r.moves).sum();
        assert_eq!(total, SAMPLE_SOLUTION.moves.len());
    }

    #[test]
    fn phase_moves_within_their_limits() {
        let policy = AttemptPolicy::default();
        for report in &SAMPLE_SOLUTION.phases {
            assert!(
                report.moves <= report.phase.max_moves(&policy),
                "{:?}",
                report
            );
        }
    }

    #[test]
    fn fixed_phases_report_applied() {
        for report in &SAMPLE_SOLUTION.phases {
            let fixed = matches!(
                report.phase,
                Phase::YellowCornerPosition | Phase::FinalEdges
            );
            assert_eq!(report.outcome == Outcome::Applied, fixed, "{:?}", report);
        }
    }

    #[test]
    fn solving_is_deterministic() {
        let again = LayerSolver::default().solve_scramble(&SAMPLE);
        assert_eq!(again.moves, SAMPLE_SOLUTION.moves);
        assert_eq!(again.cube, SAMPLE_SOLUTION.cube);
    }

    #[test]
    fn solve_takes_a_scrambled_cube() {
        let cube = Cube::solved().apply_all(SAMPLE.iter().copied());
        let solution = LayerSolver::default().solve(cube);
        assert_eq!(solution.moves, SAMPLE_SOLUTION.moves);
    }

    #[test]
    fn zero_attempts_still_runs_every_phase() {
        let policy = AttemptPolicy::uniform(0);
        let solution = LayerSolver::new(policy.clone()).solve_scramble(&SAMPLE);
        assert_eq!(solution.phases.len(), 7);
        assert!(solution.moves.len() <= policy.move_ceiling());
        assert_eq!(replay(&SAMPLE, &solution), solution.cube);
    }

    #[test]
    fn solved_cube_runs_the_whole_pipeline() {
        let solution = LayerSolver::default().solve(Cube::solved());
        let moves = solution
            .phases
            .iter()
            .map(|r| (r.phase, r.moves))
            .collect::<Vec<_>>();
        assert_eq!(moves[0], (Phase::WhiteCross, 0));
        assert_eq!(moves[1], (Phase::WhiteCorners, 0));
        assert_eq!(moves[2], (Phase::MiddleLayer, 4));
        assert_eq!(moves[3], (Phase::YellowCross, 0));
        assert_eq!(moves[4], (Phase::YellowCornerPosition, 8));
        assert_eq!(solution.solved, solution.cube.is_solved());
    }

    #[test]
    fn reports_pad_to_width() {
        assert_eq!(format!("{:<9}|", Outcome::Applied), "applied  |");
        assert_eq!(format!("{:>14}", Phase::WhiteCross), "   white cross");
    }

    #[quickcheck]
    fn any_scramble_terminates_consistently(scramble: Vec<Move>, caps: u8) -> bool {
        let policy = AttemptPolicy::uniform(caps as usize % 8);
        let solution = LayerSolver::new(policy.clone()).solve_scramble(&scramble);

        solution.moves.len() <= policy.move_ceiling()
            && solution.solved == solution.cube.is_solved()
            && replay(&scramble, &solution) == solution.cube
    }
}
