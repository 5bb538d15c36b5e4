use crate::prelude::*;

/// One face's 3×3 sticker grid, rows top to bottom, columns left to right as
/// seen looking at the face.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Surface([[Color; 3]; 3]);

impl Surface {
    pub fn new(grid: [[Color; 3]; 3]) -> Surface {
        Surface(grid)
    }

    /// Quarter turn clockwise: (r, c) moves to (c, 2 - r).
    pub(super) fn rotate(&mut self) {
        let old = self.0;
        for (r, row) in old.iter().enumerate() {
            for (c, color) in row.iter().enumerate() {
                self.0[c][2 - r] = *color;
            }
        }
    }

    pub fn rows(&self) -> &[[Color; 3]; 3] {
        &self.0
    }

    pub fn row(&self, index: usize) -> Slice {
        Slice(self.0[index])
    }

    pub fn get(&self, row: usize, col: usize) -> Color {
        self.0[row][col]
    }

    pub fn center(&self) -> Color {
        self.0[1][1]
    }

    pub fn is_uniform(&self) -> bool {
        let center = self.center();
        self.0.iter().flatten().all(|&color| color == center)
    }

    pub(super) fn slice(&self, strip: Strip) -> Slice {
        Slice([0, 1, 2].map(|i| {
            let (row, col) = strip.position(i);
            self.0[row][col]
        }))
    }

    pub(super) fn set_slice(&mut self, strip: Strip, slice: Slice) {
        for (i, color) in slice.0.into_iter().enumerate() {
            let (row, col) = strip.position(i);
            self.0[row][col] = color;
        }
    }
}

impl From<Color> for Surface {
    fn from(color: Color) -> Surface {
        Surface([[color; 3]; 3])
    }
}

/// Three stickers read along a row or column.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Slice([Color; 3]);

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}
