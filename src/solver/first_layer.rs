//! White cross and white corners, built on the down face.

use super::{AttemptPolicy, Outcome, Session};
use crate::prelude::*;

use Color::*;
use Face::*;

/// A turn of the top layer checks every position once.
const QUARTERS: usize = 4;

struct EdgeTarget {
    side: Face,
    left: Face,
    right: Face,
    /// The down sticker of this side's cross edge.
    down: Sticker,
    /// The up sticker of the edge directly above.
    up: Sticker,
}

static EDGE_TARGETS: [EdgeTarget; 4] = [
    EdgeTarget {
        side: Front,
        left: Left,
        right: Right,
        down: Sticker::new(Down, 0, 1),
        up: Sticker::new(Up, 2, 1),
    },
    EdgeTarget {
        side: Right,
        left: Front,
        right: Back,
        down: Sticker::new(Down, 1, 2),
        up: Sticker::new(Up, 1, 2),
    },
    EdgeTarget {
        side: Back,
        left: Right,
        right: Left,
        down: Sticker::new(Down, 2, 1),
        up: Sticker::new(Up, 0, 1),
    },
    EdgeTarget {
        side: Left,
        left: Back,
        right: Front,
        down: Sticker::new(Down, 1, 0),
        up: Sticker::new(Up, 1, 0),
    },
];

impl EdgeTarget {
    fn at(&self, row: usize, col: usize) -> Sticker {
        Sticker::new(self.side, row, col)
    }

    fn is_aligned(&self, session: &Session) -> bool {
        session.get(self.at(2, 1)) == session.center(self.side)
    }

    fn is_placed(&self, session: &Session) -> bool {
        session.get(self.down) == White && self.is_aligned(session)
    }
}

// Top-layer search, then at most 4 more moves from a single placement step.
const CROSS_MOVES_PER_ATTEMPT: usize = QUARTERS + 4;
const ALIGNMENT_MOVES: usize = QUARTERS - 1;

pub(super) fn cross_move_limit(policy: &AttemptPolicy) -> usize {
    EDGE_TARGETS.len() * policy.cross_attempts * CROSS_MOVES_PER_ATTEMPT + ALIGNMENT_MOVES
}

pub(super) fn white_cross(session: &mut Session, policy: &AttemptPolicy) -> Outcome {
    for target in &EDGE_TARGETS {
        for _ in 0..policy.cross_attempts {
            if target.is_placed(session) {
                break;
            }
            if drop_from_top(session, target) {
                break;
            }
            place_step(session, target);
        }
    }

    align_cross(session);

    if EDGE_TARGETS.iter().all(|t| t.is_placed(session)) {
        Outcome::Succeeded
    } else {
        Outcome::Exhausted
    }
}

/// Turns the top layer looking for a white sticker above `target` whose side
/// color already matches, and drops it into place.
fn drop_from_top(session: &mut Session, target: &EdgeTarget) -> bool {
    for _ in 0..QUARTERS {
        if session.get(target.up) == White
            && session.get(target.at(0, 1)) == session.center(target.side)
        {
            session.turn(Move::half(target.side));
            return true;
        }
        session.turn(Move::cw(Up));
    }
    false
}

/// Moves one stray white edge sticker closer to the top layer.
fn place_step(session: &mut Session, target: &EdgeTarget) {
    let side = target.side;

    if session.get(target.down) == White {
        // White in the slot but the wrong side color: lift it out.
        session.turn(Move::half(side));
    } else if session.get(target.at(1, 0)) == White {
        session.apply(&[
            Move::ccw(target.left),
            Move::cw(Up),
            Move::cw(side),
            Move::ccw(Up),
        ]);
    } else if session.get(target.at(1, 2)) == White {
        session.apply(&[
            Move::cw(target.right),
            Move::ccw(Up),
            Move::ccw(side),
            Move::cw(Up),
        ]);
    } else if has_stray_bottom_edge(session) {
        for _ in 0..QUARTERS - 1 {
            if session.get(target.down) == White {
                break;
            }
            session.turn(Move::cw(Down));
        }
    } else if session.get(target.at(0, 1)) == White || session.get(target.at(2, 1)) == White {
        // Flipped edge: bring it into the middle layer.
        session.turn(Move::cw(side));
    }
}

fn has_stray_bottom_edge(session: &Session) -> bool {
    EDGE_TARGETS
        .iter()
        .any(|t| session.get(t.down) == White && !t.is_aligned(session))
}

fn align_cross(session: &mut Session) {
    let target = match EDGE_TARGETS.iter().find(|t| session.get(t.down) == White) {
        Some(target) => target,
        None => return,
    };

    for _ in 0..ALIGNMENT_MOVES {
        if target.is_aligned(session) {
            break;
        }
        session.turn(Move::cw(Down));
    }
}

struct CornerSlot {
    down: Sticker,
    /// Side stickers of the slot and the faces whose centers they should match.
    sides: [(Sticker, Face); 2],
    /// The corner directly above the slot.
    above: [Sticker; 3],
    /// Face turned by the insertion.
    turn: Face,
}

static CORNER_SLOTS: [CornerSlot; 4] = [
    CornerSlot {
        down: Sticker::new(Down, 0, 2),
        sides: [
            (Sticker::new(Front, 2, 2), Front),
            (Sticker::new(Right, 2, 0), Right),
        ],
        above: [
            Sticker::new(Up, 2, 2),
            Sticker::new(Front, 0, 2),
            Sticker::new(Right, 0, 0),
        ],
        turn: Right,
    },
    CornerSlot {
        down: Sticker::new(Down, 2, 2),
        sides: [
            (Sticker::new(Right, 2, 2), Right),
            (Sticker::new(Back, 2, 0), Back),
        ],
        above: [
            Sticker::new(Up, 0, 2),
            Sticker::new(Right, 0, 2),
            Sticker::new(Back, 0, 0),
        ],
        turn: Back,
    },
    CornerSlot {
        down: Sticker::new(Down, 2, 0),
        sides: [
            (Sticker::new(Back, 2, 2), Back),
            (Sticker::new(Left, 2, 0), Left),
        ],
        above: [
            Sticker::new(Up, 0, 0),
            Sticker::new(Back, 0, 2),
            Sticker::new(Left, 0, 0),
        ],
        turn: Left,
    },
    CornerSlot {
        down: Sticker::new(Down, 0, 0),
        sides: [
            (Sticker::new(Left, 2, 2), Left),
            (Sticker::new(Front, 2, 0), Front),
        ],
        above: [
            Sticker::new(Up, 2, 0),
            Sticker::new(Left, 0, 2),
            Sticker::new(Front, 0, 0),
        ],
        turn: Front,
    },
];

impl CornerSlot {
    fn is_filled(&self, session: &Session) -> bool {
        let mut found = self.sides.map(|(sticker, _)| session.get(sticker));
        let mut expected = self.sides.map(|(_, face)| session.center(face));
        found.sort();
        expected.sort();
        session.get(self.down) == White && found == expected
    }

    fn insertion(&self) -> [Move; 3] {
        [Move::cw(self.turn), Move::cw(Up), Move::ccw(self.turn)]
    }

    fn white_above(&self, session: &Session) -> bool {
        self.above.iter().any(|&s| session.get(s) == White)
    }
}

pub(super) fn corner_move_limit(policy: &AttemptPolicy) -> usize {
    let per_attempt = QUARTERS + 3 * policy.corner_insertions;
    CORNER_SLOTS.len() * policy.corner_attempts * per_attempt
}

pub(super) fn white_corners(session: &mut Session, policy: &AttemptPolicy) -> Outcome {
    for slot in &CORNER_SLOTS {
        for _ in 0..policy.corner_attempts {
            if slot.is_filled(session) {
                break;
            }

            if session.get(slot.down) == White {
                // Wrong corner in the slot: kick it up into the top layer.
                session.apply(&slot.insertion());
                continue;
            }

            if !bring_white_above(session, slot) {
                break;
            }

            for _ in 0..policy.corner_insertions {
                if session.get(slot.down) == White {
                    break;
                }
                session.apply(&slot.insertion());
            }
        }
    }

    if CORNER_SLOTS.iter().all(|slot| slot.is_filled(session)) {
        Outcome::Succeeded
    } else {
        Outcome::Exhausted
    }
}

fn bring_white_above(session: &mut Session, slot: &CornerSlot) -> bool {
    for _ in 0..QUARTERS {
        if slot.white_above(session) {
            return true;
        }
        session.turn(Move::cw(Up));
    }
    false
}
