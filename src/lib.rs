//! Crate root module declarations for the Chess Bomb puzzle solver.
//!
//! An 8x8 board holds skulls with hit points; chess pieces placed on empty
//! cells deal one damage to every cell their pattern reaches. This crate
//! exposes the attack tables, the immutable puzzle state, the beam-search
//! solver, a background task wrapper for interactive callers, and notation
//! and rendering helpers used by the binaries and tests.

pub mod puzzle_errors;

pub mod puzzle {
    pub mod board;
    pub mod inventory;
    pub mod puzzle_state;
    pub mod puzzle_types;
}

pub mod attacks {
    pub mod attack_table;
    pub mod bishop_attacks;
    pub mod king_attacks;
    pub mod knight_attacks;
    pub mod pawn_attacks;
    pub mod queen_attacks;
    pub mod rook_attacks;
}

pub mod search {
    pub mod beam_search;
    pub mod efficiency;
    pub mod progress;
    pub mod solver_config;
}

pub mod task {
    pub mod solve_task;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_notation;
    pub mod puzzle_generator;
    pub mod render_puzzle_state;
    pub mod solution_text;
}

pub use puzzle::board::Board;
pub use puzzle::inventory::Inventory;
pub use puzzle::puzzle_state::PuzzleState;
pub use puzzle::puzzle_types::{Cell, PieceKind, Placement};
pub use puzzle_errors::PuzzleError;
pub use search::beam_search::{solve, BeamSearchSolver, SearchOutcome};
pub use search::solver_config::SolverConfig;
