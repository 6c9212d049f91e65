//! Errors used throughout the puzzle solver.
//!
//! `PuzzleError` is the single error type for input validation, notation
//! parsing and solver configuration. It only covers true precondition
//! violations: a rejected placement or an unsolved search is a normal result
//! (`None`, `-1` or a `SearchOutcome` variant), never an error.
//!
//! Usage guidelines:
//! - Boundary functions (constructors, parsers, `solve`) return
//!   `Result<..., PuzzleError>` and fail before any search work is done.
//! - The search loop itself never produces a `PuzzleError`.

use thiserror::Error;

/// Unified error type for the puzzle solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Row or column outside `0..8`.
    ///
    /// Payload: the offending (row, col) as given by the caller.
    #[error("cell ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },

    /// A caller-supplied board contained a value the puzzle cannot start from
    /// (negative values are reserved for placed pieces).
    #[error("cell ({row}, {col}) holds invalid starting value {value}")]
    InvalidCellValue { row: usize, col: usize, value: i32 },

    /// The board has no enemy hit points left, so there is nothing to search.
    #[error("puzzle has no skulls to clear")]
    InvalidPuzzle,

    /// Board notation string failed to parse.
    ///
    /// Payload: a description of what was wrong.
    #[error("invalid board notation: {0}")]
    InvalidNotation(String),

    /// Algebraic square name (for example `d5`) failed to parse.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A piece symbol outside `P N B R Q K`.
    #[error("unknown piece symbol '{0}'")]
    UnknownPieceSymbol(char),

    /// Inventory notation string failed to parse.
    #[error("invalid inventory: {0}")]
    InvalidInventory(String),

    /// Unknown solver option name or unusable value.
    #[error("invalid solver option {name}={value}")]
    InvalidOption { name: String, value: String },
}
