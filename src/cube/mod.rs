use crate::prelude::*;

use enum_iterator::Sequence;

mod adjacency;
mod cubie;
mod surface;

pub use adjacency::{neighbors, Line, Strip};
pub use cubie::{CORNERS, EDGES};
pub use surface::{Slice, Surface};

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        enum_iterator::all::<Face>().find(|face| face.letter() == c)
    }

    /// Color of this face's stickers on a solved cube.
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::Yellow,
            Face::Down => Color::White,
            Face::Left => Color::Red,
            Face::Right => Color::Orange,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Colors of the four faces around the white/yellow axis.
    pub fn is_side(self) -> bool {
        matches!(
            self,
            Color::Red | Color::Orange | Color::Green | Color::Blue
        )
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single sticker position: face, row, column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Sticker {
    pub const fn new(face: Face, row: usize, col: usize) -> Sticker {
        Sticker { face, row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    up: Surface,
    down: Surface,
    front: Surface,
    back: Surface,
    left: Surface,
    right: Surface,
}

impl CubeLike for Cube {
    fn solved() -> Cube {
        let surface = |face: Face| Surface::from(face.home_color());
        Cube {
            up: surface(Face::Up),
            down: surface(Face::Down),
            front: surface(Face::Front),
            back: surface(Face::Back),
            left: surface(Face::Left),
            right: surface(Face::Right),
        }
    }

    fn apply(mut self, move_: Move) -> Self {
        self.rotate(move_);
        self
    }
}

impl Cube {
    pub fn rotate(&mut self, move_: impl Into<Move>) {
        let move_ = move_.into();
        for _ in 0..move_.direction.quarter_turns() {
            self.quarter_turn(move_.face);
        }
    }

    /// Parses and applies a single notation token.
    pub fn apply_move(&mut self, notation: &str) -> Result<(), InvalidMoveError> {
        self.rotate(notation.parse::<Move>()?);
        Ok(())
    }

    /// Applies whitespace-separated tokens in order, stopping at the first
    /// invalid one. Tokens before it stay applied.
    pub fn apply_moves(&mut self, sequence: &str) -> Result<(), InvalidMoveError> {
        for token in sequence.split_whitespace() {
            self.apply_move(token)?;
        }
        Ok(())
    }

    pub fn face(&self, face: Face) -> &Surface {
        match face {
            Face::Up => &self.up,
            Face::Down => &self.down,
            Face::Left => &self.left,
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Back => &self.back,
        }
    }

    pub fn get(&self, sticker: Sticker) -> Color {
        self.face(sticker.face).get(sticker.row, sticker.col)
    }

    pub fn is_solved(&self) -> bool {
        enum_iterator::all::<Face>().all(|face| self.face(face).is_uniform())
    }

    /// Sticker count per color, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for face in enum_iterator::all::<Face>() {
            for row in self.face(face).rows() {
                for color in row {
                    counts[*color as usize] += 1;
                }
            }
        }
        counts
    }

    fn quarter_turn(&mut self, face: Face) {
        self.surface_mut(face).rotate();

        let strips = neighbors(face);
        let slices = strips.map(|strip| self.face(strip.face).slice(strip));
        for (i, strip) in strips.iter().enumerate() {
            self.surface_mut(strip.face)
                .set_slice(*strip, slices[(i + 3) % 4]);
        }
    }

    fn surface_mut(&mut self, face: Face) -> &mut Surface {
        match face {
            Face::Up => &mut self.up,
            Face::Down => &mut self.down,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
        }
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for index in 0..3 {
            writeln!(f, "    {}", self.up.row(index))?;
        }

        let band = [&self.left, &self.front, &self.right, &self.back];
        for index in 0..3 {
            let line = band
                .iter()
                .map(|surface| surface.row(index).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        for index in 0..3 {
            writeln!(f, "    {}", self.down.row(index))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert!(Cube::solved().is_solved());
        assert_eq!(Cube::solved().color_counts(), [9; 6]);
    }

    #[test]
    fn single_move_is_not_solved() {
        for m in Move::all() {
            assert!(!Cube::solved().apply(m).is_solved(), "{}", m);
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let start = cube_with_moves("R U2 F' L D B'");
        for m in Move::all() {
            let turned = (0..4).fold(start.clone(), |cube, _| cube.apply(m));
            assert_eq!(turned, start, "{}", m);
        }
    }

    #[test]
    fn two_half_turns_are_identity() {
        let start = cube_with_moves("F D' L2 B U R'");
        for face in enum_iterator::all::<Face>() {
            let half = Move::half(face);
            assert_eq!(start.clone().apply(half).apply(half), start, "{}", half);
        }
    }

    #[test]
    fn move_then_reverse_is_identity() {
        let start = cube_with_moves("B2 R' D F U' L");
        for m in Move::all() {
            assert_eq!(start.clone().apply(m).apply(m.reverse()), start, "{}", m);
        }
    }

    #[test]
    fn right_then_right_prime() {
        let mut cube = Cube::solved();
        cube.apply_move("R").unwrap();
        cube.apply_move("R'").unwrap();
        assert_eq!(cube, Cube::solved());
    }

    #[test]
    fn double_up_twice() {
        let mut cube = Cube::solved();
        cube.apply_moves("U2 U2").unwrap();
        assert_eq!(cube, Cube::solved());
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = Move::parse_sequence("R U R' U'").unwrap();
        let cube = (0..6).fold(Cube::solved(), |cube, _| cube.apply_all(sexy.clone()));
        assert_eq!(cube, Cube::solved());

        let once = Cube::solved().apply_all(sexy);
        assert_ne!(once, Cube::solved());
    }

    #[test]
    fn apply_moves_stops_at_first_invalid_token() {
        let mut cube = Cube::solved();
        let err = cube.apply_moves("R U X F").unwrap_err();
        assert_eq!(err.token, "X");
        assert_eq!(cube, cube_with_moves("R U"));
    }

    #[test]
    fn invalid_single_move_leaves_cube_untouched() {
        let mut cube = Cube::solved();
        assert!(cube.apply_move("R3").is_err());
        assert_eq!(cube, Cube::solved());
    }

    #[test]
    fn up_turn_moves_front_row_to_left() {
        let cube = cube_with_moves("U");
        assert_eq!(
            cube.face(Face::Left).row(0),
            cube_with_moves("").face(Face::Front).row(0)
        );
        assert_eq!(cube.get(Sticker::new(Face::Left, 0, 1)), Color::Green);
        assert_eq!(cube.get(Sticker::new(Face::Right, 0, 1)), Color::Blue);
        assert_eq!(cube.get(Sticker::new(Face::Front, 1, 1)), Color::Green);
    }

    #[test]
    fn front_turn_carries_up_row_onto_right_column() {
        let cube = cube_with_moves("F");
        for row in 0..3 {
            assert_eq!(cube.get(Sticker::new(Face::Right, row, 0)), Color::Yellow);
            assert_eq!(cube.get(Sticker::new(Face::Left, row, 2)), Color::White);
        }
        for col in 0..3 {
            assert_eq!(cube.get(Sticker::new(Face::Up, 2, col)), Color::Red);
            assert_eq!(cube.get(Sticker::new(Face::Down, 0, col)), Color::Orange);
        }
    }

    #[test]
    fn display_renders_net() {
        let rendered = Cube::solved().to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    YYY");
        assert_eq!(lines[3], "RRR GGG OOO BBB");
        assert_eq!(lines[8], "    WWW");
    }

    #[quickcheck]
    fn moves_preserve_color_counts(moves: Vec<Move>) -> bool {
        Cube::solved().apply_all(moves).color_counts() == [9; 6]
    }

    #[quickcheck]
    fn inverse_sequence_restores(moves: Vec<Move>) -> bool {
        let inverse = moves.iter().rev().map(|m| m.reverse()).collect::<Vec<_>>();
        Cube::solved().apply_all(moves).apply_all(inverse) == Cube::solved()
    }

    #[quickcheck]
    fn replay_is_deterministic(moves: Vec<Move>) -> bool {
        Cube::solved().apply_all(moves.clone()) == Cube::solved().apply_all(moves)
    }
}
