//! 8x8 grid of skull hit points and placed pieces.

use crate::puzzle::puzzle_types::{Cell, BOARD_SIZE, CELL_COUNT, EMPTY, OCCUPIED};
use crate::puzzle_errors::PuzzleError;

/// Cell values: `0` empty, `OCCUPIED` (-1) placed piece, positive = skull HP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [i32; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [EMPTY; CELL_COUNT],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Starting board from caller rows. Negative values are rejected: a puzzle
    /// never begins with pieces already placed.
    pub fn from_rows(rows: [[i32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, PuzzleError> {
        let mut board = Self::default();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value < 0 {
                    return Err(PuzzleError::InvalidCellValue { row, col, value });
                }
                board.cells[row * BOARD_SIZE + col] = value;
            }
        }
        Ok(board)
    }

    /// Board with skulls at the given cells and nothing else.
    pub fn with_skulls(skulls: &[(Cell, i32)]) -> Result<Self, PuzzleError> {
        let mut board = Self::default();
        for &(cell, hit_points) in skulls {
            if hit_points < 0 {
                return Err(PuzzleError::InvalidCellValue {
                    row: cell.row(),
                    col: cell.col(),
                    value: hit_points,
                });
            }
            board.cells[cell.index()] = hit_points;
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> [[i32; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[EMPTY; BOARD_SIZE]; BOARD_SIZE];
        for cell in Cell::all() {
            rows[cell.row()][cell.col()] = self.cells[cell.index()];
        }
        rows
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> i32 {
        self.cells[cell.index()]
    }

    /// Raw write used while forking states and parsing notation.
    #[inline]
    pub(crate) fn set(&mut self, cell: Cell, value: i32) {
        self.cells[cell.index()] = value;
    }

    #[inline]
    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.get(cell) == EMPTY
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell) == OCCUPIED
    }

    /// Mask of cells still holding a skull.
    pub fn skull_mask(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value > 0)
            .fold(0u64, |mask, (index, _)| mask | (1u64 << index))
    }

    /// Mask of cells a piece may still be placed on.
    pub fn empty_mask(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == EMPTY)
            .fold(0u64, |mask, (index, _)| mask | (1u64 << index))
    }

    /// Sum of positive cell values.
    pub fn remaining_health(&self) -> i64 {
        self.cells.iter().map(|&value| i64::from(value.max(0))).sum()
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|&value| value <= 0)
    }

    /// Damage every skull in `mask` by one. Empty and occupied cells are untouched.
    pub(crate) fn apply_damage(&mut self, mask: u64) {
        let mut remaining = mask;
        while remaining != 0 {
            let index = remaining.trailing_zeros() as usize;
            remaining &= remaining - 1;
            if self.cells[index] > 0 {
                self.cells[index] -= 1;
            }
        }
    }
}
