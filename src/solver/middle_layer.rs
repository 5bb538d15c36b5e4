use super::{AttemptPolicy, Outcome, Session};
use crate::prelude::*;

use Face::*;

const RIGHT_INSERT: [Move; 8] = [
    Move::cw(Up),
    Move::cw(Right),
    Move::ccw(Up),
    Move::ccw(Right),
    Move::ccw(Up),
    Move::ccw(Front),
    Move::cw(Up),
    Move::cw(Front),
];

const LEFT_INSERT: [Move; 8] = [
    Move::ccw(Up),
    Move::ccw(Left),
    Move::cw(Up),
    Move::cw(Left),
    Move::cw(Up),
    Move::cw(Front),
    Move::ccw(Up),
    Move::ccw(Front),
];

/// Middle-layer positions that must not show yellow.
const MIDDLE_STICKERS: [Sticker; 4] = [
    Sticker::new(Left, 1, 2),
    Sticker::new(Front, 1, 0),
    Sticker::new(Right, 1, 0),
    Sticker::new(Back, 1, 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Insertion {
    Right,
    Left,
}

impl Insertion {
    fn moves(self) -> &'static [Move; 8] {
        match self {
            Insertion::Right => &RIGHT_INSERT,
            Insertion::Left => &LEFT_INSERT,
        }
    }
}

fn both_side_colors(top: Color, front: Color) -> bool {
    top.is_side() && front.is_side()
}

type Guard = fn(Color, Color) -> bool;

// First matching guard wins. Both insertions share a guard, so the left
// insert never fires.
const INSERTION_RULES: [(Guard, Insertion); 2] = [
    (both_side_colors, Insertion::Right),
    (both_side_colors, Insertion::Left),
];

fn choose_insertion(top: Color, front: Color) -> Option<Insertion> {
    INSERTION_RULES
        .iter()
        .find(|(guard, _)| guard(top, front))
        .map(|&(_, insertion)| insertion)
}

fn is_middle_layer_clear(session: &Session) -> bool {
    MIDDLE_STICKERS
        .iter()
        .all(|&sticker| session.get(sticker) != Color::Yellow)
}

pub(super) fn move_limit(policy: &AttemptPolicy) -> usize {
    policy.middle_sweeps * 4 * RIGHT_INSERT.len().max(LEFT_INSERT.len())
}

pub(super) fn middle_layer(session: &mut Session, policy: &AttemptPolicy) -> Outcome {
    for _ in 0..policy.middle_sweeps {
        for _ in 0..4 {
            let top = session.get(Sticker::new(Up, 2, 1));
            let front = session.get(Sticker::new(Front, 0, 1));

            match choose_insertion(top, front) {
                Some(insertion) => session.apply(insertion.moves()),
                None => session.turn(Move::cw(Up)),
            }
        }

        if is_middle_layer_clear(session) {
            return Outcome::Succeeded;
        }
    }

    Outcome::Exhausted
}
