//! Pawn reachability masks.
//!
//! Puzzle pawns hit a plus-shaped cross: distance 1 and 2 along the four
//! axis directions. There is no diagonal capture and no forward direction.

use crate::attacks::king_attacks::set_if_valid;

pub const PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks();

#[inline]
pub const fn pawn_attacks(square: usize) -> u64 {
    PAWN_ATTACKS[square]
}

const fn generate_pawn_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;
        let mut step = 1;

        while step <= 2 {
            attacks |= set_if_valid(row - step, col);
            attacks |= set_if_valid(row + step, col);
            attacks |= set_if_valid(row, col - step);
            attacks |= set_if_valid(row, col + step);
            step += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, PAWN_ATTACKS};

    #[test]
    fn pawn_in_center_reaches_full_cross() {
        // (3, 3)
        assert_eq!(PAWN_ATTACKS[27].count_ones(), 8);
    }

    #[test]
    fn pawn_in_corner_is_clipped() {
        let attacks = pawn_attacks(0);
        assert_eq!(attacks.count_ones(), 4);
        for sq in [1usize, 2, 8, 16] {
            assert_ne!(attacks & (1u64 << sq), 0, "square {sq} missing");
        }
    }

    #[test]
    fn pawn_never_hits_diagonals() {
        // (3, 3) must not reach (2, 2) or (4, 4)
        let attacks = pawn_attacks(27);
        assert_eq!(attacks & (1u64 << 18), 0);
        assert_eq!(attacks & (1u64 << 36), 0);
    }
}
