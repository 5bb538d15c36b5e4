use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
}

/// Three stickers along one edge of a face, read in the order a turn carries
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
    pub reversed: bool,
}

impl Strip {
    /// Grid position of the `i`th sticker along this strip.
    pub fn position(&self, i: usize) -> (usize, usize) {
        let i = if self.reversed { 2 - i } else { i };
        match self.line {
            Line::Row(row) => (row, i),
            Line::Column(col) => (i, col),
        }
    }

    const fn reversed(self) -> Strip {
        Strip {
            reversed: true,
            ..self
        }
    }
}

const fn row(face: Face, row: usize) -> Strip {
    Strip {
        face,
        line: Line::Row(row),
        reversed: false,
    }
}

const fn col(face: Face, col: usize) -> Strip {
    Strip {
        face,
        line: Line::Column(col),
        reversed: false,
    }
}

use Face::*;

// Indexed by `Face as usize`. A clockwise quarter turn moves the contents of
// each strip into the next one.
static NEIGHBORS: [[Strip; 4]; 6] = [
    // Up
    [row(Front, 0), row(Left, 0), row(Back, 0), row(Right, 0)],
    // Down
    [row(Front, 2), row(Right, 2), row(Back, 2), row(Left, 2)],
    // Left
    [
        col(Up, 0),
        col(Front, 0),
        col(Down, 0),
        col(Back, 2).reversed(),
    ],
    // Right
    [
        col(Up, 2),
        col(Back, 0).reversed(),
        col(Down, 2),
        col(Front, 2),
    ],
    // Front
    [
        row(Up, 2),
        col(Right, 0),
        row(Down, 0).reversed(),
        col(Left, 2).reversed(),
    ],
    // Back
    [
        row(Up, 0).reversed(),
        col(Left, 0),
        row(Down, 2),
        col(Right, 2).reversed(),
    ],
];

/// The four strips bordering `face`, in clockwise cycle order.
pub fn neighbors(face: Face) -> [Strip; 4] {
    NEIGHBORS[face as usize]
}
