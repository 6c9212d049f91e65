use crate::attacks::king_attacks::set_if_valid;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: usize) -> u64 {
    KNIGHT_ATTACKS[square]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        attacks |= set_if_valid(row - 2, col - 1);
        attacks |= set_if_valid(row - 2, col + 1);
        attacks |= set_if_valid(row - 1, col - 2);
        attacks |= set_if_valid(row - 1, col + 2);
        attacks |= set_if_valid(row + 1, col - 2);
        attacks |= set_if_valid(row + 1, col + 2);
        attacks |= set_if_valid(row + 2, col - 1);
        attacks |= set_if_valid(row + 2, col + 1);

        table[sq] = attacks;
        sq += 1;
    }

    table
}
