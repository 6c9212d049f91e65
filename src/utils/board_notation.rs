//! Single-line notation for puzzle input.
//!
//! Board: eight ranks separated by `/`, top row first, exactly eight tokens
//! per rank. `.` or `0` is empty, `1`-`9` is a skull with that many hit
//! points, and `w`/`g`/`b` are the white, gray and boss skull shorthands.
//! Rendered mid-search boards use `x` for placed pieces.
//!
//! Inventory: comma-separated entries like `Q=1`, `r2` or `K`, where a bare
//! symbol means one piece.

use crate::puzzle::board::Board;
use crate::puzzle::inventory::Inventory;
use crate::puzzle::puzzle_types::{Cell, PieceKind, SkullKind, BOARD_SIZE, EMPTY, OCCUPIED};
use crate::puzzle_errors::PuzzleError;

const OCCUPIED_CHAR: char = 'x';

/// Parse a starting board. Placed-piece markers are rejected.
pub fn parse_board_notation(notation: &str) -> Result<Board, PuzzleError> {
    parse_board(notation, false)
}

/// Parse a board that may contain placed pieces (`x`).
pub fn parse_board_notation_allow_occupied(notation: &str) -> Result<Board, PuzzleError> {
    parse_board(notation, true)
}

fn parse_board(notation: &str, allow_occupied: bool) -> Result<Board, PuzzleError> {
    let ranks: Vec<&str> = notation.trim().split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(PuzzleError::InvalidNotation(format!(
            "expected {BOARD_SIZE} ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::new_empty();
    for (row, rank) in ranks.iter().enumerate() {
        let tokens: Vec<char> = rank.chars().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(PuzzleError::InvalidNotation(format!(
                "rank {} has {} cells",
                row + 1,
                tokens.len()
            )));
        }

        for (col, &token) in tokens.iter().enumerate() {
            let value = cell_value_from_char(token, allow_occupied).ok_or_else(|| {
                PuzzleError::InvalidNotation(format!(
                    "unexpected '{token}' at rank {} cell {}",
                    row + 1,
                    col + 1
                ))
            })?;
            board.set(Cell::from_index(row * BOARD_SIZE + col), value);
        }
    }

    Ok(board)
}

fn cell_value_from_char(token: char, allow_occupied: bool) -> Option<i32> {
    match token {
        '.' => Some(EMPTY),
        'x' | 'X' if allow_occupied => Some(OCCUPIED),
        _ => token
            .to_digit(10)
            .map(|hp| hp as i32)
            .or_else(|| SkullKind::from_letter(token).map(SkullKind::hit_points)),
    }
}

/// Render a board in the notation `parse_board_notation_allow_occupied` reads.
/// Fails for skulls above 9 hit points, which the notation cannot express.
pub fn board_to_notation(board: &Board) -> Result<String, PuzzleError> {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));

    for (row, values) in board.to_rows().iter().enumerate() {
        if row > 0 {
            out.push('/');
        }
        for &value in values {
            let ch = match value {
                EMPTY => '.',
                OCCUPIED => OCCUPIED_CHAR,
                1..=9 => char::from(b'0' + value as u8),
                _ => {
                    return Err(PuzzleError::InvalidNotation(format!(
                        "cell value {value} cannot be written"
                    )))
                }
            };
            out.push(ch);
        }
    }

    Ok(out)
}

/// Parse an inventory such as `Q=1,R=2,k`.
pub fn parse_inventory_notation(notation: &str) -> Result<Inventory, PuzzleError> {
    let mut inventory = Inventory::new_empty();

    for entry in notation.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut chars = entry.chars();
        let symbol = chars
            .next()
            .ok_or_else(|| PuzzleError::InvalidInventory(entry.to_owned()))?;
        let kind = PieceKind::from_symbol(symbol)?;

        let rest = chars.as_str().trim();
        let rest = rest.strip_prefix('=').unwrap_or(rest).trim();
        let count = if rest.is_empty() {
            1
        } else {
            rest.parse::<u32>()
                .map_err(|_| PuzzleError::InvalidInventory(entry.to_owned()))?
        };
        inventory.add(kind, count);
    }

    Ok(inventory)
}

/// Render non-zero counts as `Q=1,R=2`.
pub fn inventory_to_notation(inventory: &Inventory) -> String {
    inventory
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(kind, count)| format!("{}={}", kind.symbol(), count))
        .collect::<Vec<_>>()
        .join(",")
}
