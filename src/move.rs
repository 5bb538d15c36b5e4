use crate::cube::*;

use enum_iterator::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Direction {
    /// Clockwise quarter turns this direction amounts to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Direction::Single => 1,
            Direction::Double => 2,
            Direction::Reverse => 3,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Direction::Single => "",
            Direction::Double => "2",
            Direction::Reverse => "'",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid move: '{token}'")]
pub struct InvalidMoveError {
    pub token: String,
}

lazy_static::lazy_static! {
    static ref ALL_MOVES: Vec<Move> = enum_iterator::all::<Face>()
        .flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
        .collect();
}

impl Move {
    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub const fn cw(face: Face) -> Move {
        Move::new(face, Direction::Single)
    }

    pub const fn ccw(face: Face) -> Move {
        Move::new(face, Direction::Reverse)
    }

    pub const fn half(face: Face) -> Move {
        Move::new(face, Direction::Double)
    }

    /// The 18 legal face turns.
    pub fn all() -> impl Iterator<Item = Move> {
        ALL_MOVES.iter().copied()
    }

    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        };
        Move::new(self.face, direction)
    }

    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, InvalidMoveError> {
        s.split_whitespace().map(|token| token.parse()).collect()
    }
}

impl core::str::FromStr for Move {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Move, InvalidMoveError> {
        let invalid = || InvalidMoveError {
            token: s.to_string(),
        };

        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(invalid)?;

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(_) => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.direction.suffix())
    }
}

pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
