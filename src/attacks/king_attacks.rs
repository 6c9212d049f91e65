//! King reachability masks: the up-to-8 adjacent cells.

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: usize) -> u64 {
    KING_ATTACKS[square]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 1, col - 1);
        attacks |= set_if_valid(row - 1, col);
        attacks |= set_if_valid(row - 1, col + 1);
        attacks |= set_if_valid(row, col - 1);
        attacks |= set_if_valid(row, col + 1);
        attacks |= set_if_valid(row + 1, col - 1);
        attacks |= set_if_valid(row + 1, col);
        attacks |= set_if_valid(row + 1, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (col as usize);
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, KING_ATTACKS};

    #[test]
    fn king_in_corner_reaches_three_cells() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3);
        assert_eq!(king_attacks(63).count_ones(), 3);
    }

    #[test]
    fn king_in_center_reaches_eight_cells() {
        // (3, 3)
        assert_eq!(king_attacks(27).count_ones(), 8);
    }

    #[test]
    fn king_on_edge_reaches_five_cells() {
        // (0, 4)
        assert_eq!(king_attacks(4).count_ones(), 5);
    }
}
