//! Yellow cross, yellow corners and the final edge cycle on the up face.

use super::{AttemptPolicy, Outcome, Session};
use crate::prelude::*;

use Face::*;

const L_SHAPE_ALGORITHM: [Move; 6] = [
    Move::cw(Front),
    Move::cw(Up),
    Move::cw(Right),
    Move::ccw(Up),
    Move::ccw(Right),
    Move::ccw(Front),
];

// Also used for the dot, which normally needs its own setup.
const LINE_ALGORITHM: [Move; 6] = [
    Move::cw(Front),
    Move::cw(Right),
    Move::cw(Up),
    Move::ccw(Right),
    Move::ccw(Up),
    Move::ccw(Front),
];

const CORNER_CYCLE: [Move; 8] = [
    Move::cw(Up),
    Move::cw(Right),
    Move::ccw(Up),
    Move::ccw(Left),
    Move::cw(Up),
    Move::ccw(Right),
    Move::ccw(Up),
    Move::cw(Left),
];

const TWIST_TRIGGER: [Move; 4] = [
    Move::ccw(Right),
    Move::ccw(Down),
    Move::cw(Right),
    Move::cw(Down),
];

const EDGE_CYCLE: [Move; 8] = [
    Move::cw(Right),
    Move::cw(Up),
    Move::ccw(Right),
    Move::cw(Up),
    Move::cw(Right),
    Move::half(Up),
    Move::ccw(Right),
    Move::cw(Up),
];

const EDGE_SWAP: [Move; 9] = [
    Move::ccw(Right),
    Move::cw(Front),
    Move::ccw(Right),
    Move::half(Back),
    Move::cw(Right),
    Move::ccw(Front),
    Move::ccw(Right),
    Move::half(Back),
    Move::half(Right),
];

pub(super) const POSITION_MOVES: usize = CORNER_CYCLE.len();
pub(super) const FINAL_EDGE_MOVES: usize = 4 + EDGE_CYCLE.len() + EDGE_SWAP.len();

const UP_CORNERS: [Sticker; 4] = [
    Sticker::new(Up, 0, 0),
    Sticker::new(Up, 0, 2),
    Sticker::new(Up, 2, 0),
    Sticker::new(Up, 2, 2),
];

/// Which of the up face's edge stickers are yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopPattern {
    Cross,
    Line,
    LShape,
    Dot,
}

impl TopPattern {
    fn classify(up: &Surface) -> TopPattern {
        let [back, left, right, front] =
            [(0, 1), (1, 0), (1, 2), (2, 1)].map(|(row, col)| up.get(row, col) == Color::Yellow);

        match (back, left, right, front) {
            (true, true, true, true) => TopPattern::Cross,
            (false, true, true, false) | (true, false, false, true) => TopPattern::Line,
            (true, true, false, false)
            | (true, false, true, false)
            | (false, true, false, true)
            | (false, false, true, true) => TopPattern::LShape,
            _ => TopPattern::Dot,
        }
    }

    fn algorithm(self) -> Option<&'static [Move; 6]> {
        match self {
            TopPattern::Cross => None,
            TopPattern::LShape => Some(&L_SHAPE_ALGORITHM),
            TopPattern::Line | TopPattern::Dot => Some(&LINE_ALGORITHM),
        }
    }
}

pub(super) fn cross_move_limit(policy: &AttemptPolicy) -> usize {
    policy.yellow_cross_attempts * LINE_ALGORITHM.len()
}

pub(super) fn yellow_cross(session: &mut Session, policy: &AttemptPolicy) -> Outcome {
    for _ in 0..policy.yellow_cross_attempts {
        let pattern = TopPattern::classify(session.cube.face(Up));
        log::debug!("Top pattern {:?}", pattern);
        match pattern.algorithm() {
            Some(algorithm) => session.apply(algorithm),
            None => break,
        }
    }

    if TopPattern::classify(session.cube.face(Up)) == TopPattern::Cross {
        Outcome::Succeeded
    } else {
        Outcome::Exhausted
    }
}

pub(super) fn position_corners(session: &mut Session) -> Outcome {
    session.apply(&CORNER_CYCLE);
    Outcome::Applied
}

fn corners_oriented(session: &Session) -> bool {
    UP_CORNERS
        .iter()
        .all(|&sticker| session.get(sticker) == Color::Yellow)
}

pub(super) fn orientation_move_limit(policy: &AttemptPolicy) -> usize {
    let per_corner = policy.orientation_triggers * TWIST_TRIGGER.len() + 1;
    policy.orientation_sweeps * 4 * per_corner
}

pub(super) fn orient_corners(session: &mut Session, policy: &AttemptPolicy) -> Outcome {
    let front_right = Sticker::new(Up, 2, 2);

    let mut sweeps = 0;
    while !corners_oriented(session) && sweeps < policy.orientation_sweeps {
        for _ in 0..4 {
            for _ in 0..policy.orientation_triggers {
                if session.get(front_right) == Color::Yellow {
                    break;
                }
                session.apply(&TWIST_TRIGGER);
            }
            session.turn(Move::cw(Up));
        }
        sweeps += 1;
    }

    if corners_oriented(session) {
        Outcome::Succeeded
    } else {
        Outcome::Exhausted
    }
}

pub(super) fn final_edges(session: &mut Session) -> Outcome {
    for _ in 0..4 {
        let front_matches = session.get(Sticker::new(Front, 0, 1)) == session.center(Front);
        let right_matches = session.get(Sticker::new(Right, 0, 1)) == session.center(Right);
        if front_matches && right_matches {
            break;
        }
        session.turn(Move::cw(Up));
    }

    session.apply(&EDGE_CYCLE);
    session.apply(&EDGE_SWAP);
    Outcome::Applied
}
