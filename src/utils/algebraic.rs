//! Cell and algebraic coordinate conversions.
//!
//! The board is displayed with row 0 at the top, so row 0 is rank 8 and
//! column 0 is file `a`: `(0, 0)` is `a8`, `(7, 7)` is `h1`.

use crate::puzzle::puzzle_types::Cell;
use crate::puzzle_errors::PuzzleError;

/// Convert algebraic notation (for example: "d5") to a cell.
pub fn algebraic_to_cell(square: &str) -> Result<Cell, PuzzleError> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(PuzzleError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(PuzzleError::InvalidAlgebraic(square.to_owned()));
    }

    let col = i32::from(file - b'a');
    let row = 7 - i32::from(rank - b'1');
    Cell::new(row, col)
}

/// Convert a cell to algebraic notation (for example: "d5").
pub fn cell_to_algebraic(cell: Cell) -> String {
    let file_char = char::from(b'a' + cell.col() as u8);
    let rank_char = char::from(b'8' - cell.row() as u8);
    format!("{file_char}{rank_char}")
}
