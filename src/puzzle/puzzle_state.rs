//! Immutable puzzle snapshot: board, remaining inventory and placement history.
//!
//! A `PuzzleState` is never edited after construction. `place` forks a fresh,
//! independent copy, so beam members never share mutable storage.

use crate::attacks::attack_table::AttackPatternTable;
use crate::puzzle::board::Board;
use crate::puzzle::inventory::Inventory;
use crate::puzzle::puzzle_types::{Cell, PieceKind, Placement, OCCUPIED};

/// Efficiency value reported for a placement `place` would reject.
pub const INVALID_PLACEMENT: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    board: Board,
    inventory: Inventory,
    history: Vec<Placement>,
}

impl PuzzleState {
    /// Root state with an empty history.
    pub fn new(board: Board, inventory: Inventory) -> Self {
        Self {
            board,
            inventory,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[inline]
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    #[inline]
    pub fn into_history(self) -> Vec<Placement> {
        self.history
    }

    #[inline]
    pub fn moves_used(&self) -> usize {
        self.history.len()
    }

    #[inline]
    fn can_place(&self, kind: PieceKind, cell: Cell) -> bool {
        self.board.is_empty_cell(cell) && self.inventory.has(kind)
    }

    /// Fork a new state with `kind` placed on `cell`.
    ///
    /// Returns `None` if the cell is not empty or no `kind` is left. The
    /// placed cell becomes `OCCUPIED` and every skull the piece reaches loses
    /// exactly one hit point.
    pub fn place(&self, kind: PieceKind, cell: Cell) -> Option<PuzzleState> {
        if !self.board.is_empty_cell(cell) {
            return None;
        }
        let inventory = self.inventory.take_one(kind)?;

        let mut board = self.board.clone();
        board.set(cell, OCCUPIED);
        board.apply_damage(AttackPatternTable::global().mask(kind, cell));

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(Placement::new(kind, cell));

        Some(PuzzleState {
            board,
            inventory,
            history,
        })
    }

    /// Apply `placements` in order from `self`; `None` if any step is rejected.
    pub fn replay(&self, placements: &[Placement]) -> Option<PuzzleState> {
        placements
            .iter()
            .try_fold(self.clone(), |state, placement| {
                state.place(placement.kind, placement.cell)
            })
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.board.is_cleared()
    }

    #[inline]
    pub fn remaining_health(&self) -> i64 {
        self.board.remaining_health()
    }

    /// Skulls the placement would hit right now, each counted once regardless
    /// of its hit points. `INVALID_PLACEMENT` if `place` would reject it.
    pub fn efficiency(&self, kind: PieceKind, cell: Cell) -> i32 {
        if !self.can_place(kind, cell) {
            return INVALID_PLACEMENT;
        }
        let reach = AttackPatternTable::global().mask(kind, cell);
        (reach & self.board.skull_mask()).count_ones() as i32
    }
}
