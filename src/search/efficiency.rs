//! Candidate placement scoring.
//!
//! A candidate's efficiency is the number of skulls it would hit right now.
//! Ranking is local to one state: candidates are produced in a fixed
//! generation order (row-major cells, then `PieceKind::ALL`) and sorted
//! stably by efficiency, so equal scores keep that order.

use crate::puzzle::puzzle_state::PuzzleState;
use crate::puzzle::puzzle_types::{CellSet, PieceKind, Placement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMove {
    pub placement: Placement,
    pub efficiency: i32,
}

/// Every placement with positive efficiency, in generation order.
pub fn scored_candidates(state: &PuzzleState) -> Vec<CandidateMove> {
    let kinds: Vec<PieceKind> = state.inventory().available_kinds().collect();
    let mut candidates = Vec::new();

    if state.board().skull_mask() == 0 || kinds.is_empty() {
        return candidates;
    }

    for cell in CellSet::from_mask(state.board().empty_mask()) {
        for &kind in &kinds {
            let efficiency = state.efficiency(kind, cell);
            if efficiency > 0 {
                candidates.push(CandidateMove {
                    placement: Placement::new(kind, cell),
                    efficiency,
                });
            }
        }
    }

    candidates
}

/// The `limit` most efficient placements for `state`, best first.
pub fn rank_candidate_moves(state: &PuzzleState, limit: usize) -> Vec<CandidateMove> {
    let mut candidates = scored_candidates(state);
    // stable: ties stay in generation order
    candidates.sort_by(|a, b| b.efficiency.cmp(&a.efficiency));
    candidates.truncate(limit);
    candidates
}
