use crate::prelude::*;

use Face::*;

const fn at(face: Face, row: usize, col: usize) -> Sticker {
    Sticker::new(face, row, col)
}

/// Stickers of each corner cubie, up/down sticker first.
pub const CORNERS: [[Sticker; 3]; 8] = [
    [at(Up, 2, 0), at(Front, 0, 0), at(Left, 0, 2)],
    [at(Up, 2, 2), at(Front, 0, 2), at(Right, 0, 0)],
    [at(Up, 0, 2), at(Back, 0, 0), at(Right, 0, 2)],
    [at(Up, 0, 0), at(Back, 0, 2), at(Left, 0, 0)],
    [at(Down, 0, 0), at(Front, 2, 0), at(Left, 2, 2)],
    [at(Down, 0, 2), at(Front, 2, 2), at(Right, 2, 0)],
    [at(Down, 2, 2), at(Back, 2, 0), at(Right, 2, 2)],
    [at(Down, 2, 0), at(Back, 2, 2), at(Left, 2, 0)],
];

/// Stickers of each edge cubie.
pub const EDGES: [[Sticker; 2]; 12] = [
    [at(Up, 2, 1), at(Front, 0, 1)],
    [at(Up, 1, 2), at(Right, 0, 1)],
    [at(Up, 0, 1), at(Back, 0, 1)],
    [at(Up, 1, 0), at(Left, 0, 1)],
    [at(Down, 0, 1), at(Front, 2, 1)],
    [at(Down, 1, 2), at(Right, 2, 1)],
    [at(Down, 2, 1), at(Back, 2, 1)],
    [at(Down, 1, 0), at(Left, 2, 1)],
    [at(Front, 1, 2), at(Right, 1, 0)],
    [at(Front, 1, 0), at(Left, 1, 2)],
    [at(Back, 1, 0), at(Right, 1, 2)],
    [at(Back, 1, 2), at(Left, 1, 0)],
];
