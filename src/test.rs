use crate::prelude::*;

use rand::Rng;

pub const SAMPLE_SCRAMBLE: &str = "U R2 F B R B2 R U2 L B2 R2 U' D' R2 F R' L B2 U2 F2";

pub fn cube_with_moves(moves: &str) -> Cube {
    Cube::solved().apply_all(Move::parse_sequence(moves).unwrap())
}

impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        let index = g.gen_range(0, 18);
        Move::all().nth(index).unwrap()
    }
}
