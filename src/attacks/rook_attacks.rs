use crate::attacks::bishop_attacks::trace_ray_const;

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();

#[inline]
pub const fn rook_attacks(square: usize) -> u64 {
    ROOK_RAYS[square]
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 0, 1);
        rays |= trace_ray_const(sq_i, 0, -1);
        rays |= trace_ray_const(sq_i, 1, 0);
        rays |= trace_ray_const(sq_i, -1, 0);

        table[sq] = rays;
        sq += 1;
    }

    table
}
