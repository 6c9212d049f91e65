use crate::attacks::bishop_attacks::BISHOP_RAYS;
use crate::attacks::rook_attacks::ROOK_RAYS;

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub const fn queen_attacks(square: usize) -> u64 {
    QUEEN_RAYS[square]
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}
