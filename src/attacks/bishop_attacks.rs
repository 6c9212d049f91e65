//! Bishop reachability masks.
//!
//! Diagonal rays run to the board edge. Placed pieces and skulls never block a
//! ray, so a single precomputed table covers every position.

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub const fn bishop_attacks(square: usize) -> u64 {
    BISHOP_RAYS[square]
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

/// Every cell from `square` (exclusive) to the edge along one direction.
pub(crate) const fn trace_ray_const(square: i32, row_step: i32, col_step: i32) -> u64 {
    let mut row = (square / 8) + row_step;
    let mut col = (square % 8) + col_step;
    let mut attacks = 0u64;

    while row >= 0 && row < 8 && col >= 0 && col < 8 {
        let target = (row * 8 + col) as usize;
        attacks |= 1u64 << target;
        row += row_step;
        col += col_step;
    }

    attacks
}
