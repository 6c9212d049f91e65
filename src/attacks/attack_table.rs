//! Combined attack pattern table for all six piece kinds.
//!
//! Every (kind, origin) pair is resolved at compile time into a 64-bit mask,
//! so the search's inner loop is a single indexed load. The table lives in a
//! `static` and is only ever handed out by shared reference.

use crate::attacks::bishop_attacks::BISHOP_RAYS;
use crate::attacks::king_attacks::KING_ATTACKS;
use crate::attacks::knight_attacks::KNIGHT_ATTACKS;
use crate::attacks::pawn_attacks::PAWN_ATTACKS;
use crate::attacks::queen_attacks::QUEEN_RAYS;
use crate::attacks::rook_attacks::ROOK_RAYS;
use crate::puzzle::puzzle_types::{Cell, CellSet, PieceKind};
use crate::puzzle_errors::PuzzleError;

/// Reachability masks indexed by `[PieceKind::index()][Cell::index()]`.
#[derive(Debug)]
pub struct AttackPatternTable {
    masks: [[u64; 64]; 6],
}

static ATTACK_TABLE: AttackPatternTable = AttackPatternTable::build();

impl AttackPatternTable {
    const fn build() -> Self {
        Self {
            masks: [
                PAWN_ATTACKS,
                KNIGHT_ATTACKS,
                BISHOP_RAYS,
                ROOK_RAYS,
                QUEEN_RAYS,
                KING_ATTACKS,
            ],
        }
    }

    /// The process-wide table.
    #[inline]
    pub fn global() -> &'static AttackPatternTable {
        &ATTACK_TABLE
    }

    #[inline]
    pub fn mask(&self, kind: PieceKind, origin: Cell) -> u64 {
        self.masks[kind.index()][origin.index()]
    }

    #[inline]
    pub fn reachable_cells(&self, kind: PieceKind, origin: Cell) -> CellSet {
        CellSet::from_mask(self.mask(kind, origin))
    }
}

/// Cells a piece of `kind` placed on `origin` damages.
#[inline]
pub fn reachable_cells(kind: PieceKind, origin: Cell) -> CellSet {
    AttackPatternTable::global().reachable_cells(kind, origin)
}

/// Coordinate form of [`reachable_cells`] for callers holding raw indices.
pub fn reachable_cells_at(kind: PieceKind, row: i32, col: i32) -> Result<CellSet, PuzzleError> {
    let origin = Cell::new(row, col)?;
    Ok(reachable_cells(kind, origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: i32, col: i32) -> Cell {
        Cell::new(row, col).expect("test cell should be in bounds")
    }

    #[test]
    fn origin_is_never_reachable_from_itself() {
        for kind in PieceKind::ALL {
            for origin in Cell::all() {
                assert!(
                    !reachable_cells(kind, origin).contains(origin),
                    "{kind} at {origin} reaches itself"
                );
            }
        }
    }

    #[test]
    fn rook_and_queen_row_column_part_is_fourteen_everywhere() {
        for origin in Cell::all() {
            assert_eq!(reachable_cells(PieceKind::Rook, origin).len(), 14);
            let queen = reachable_cells(PieceKind::Queen, origin).mask();
            let rook = reachable_cells(PieceKind::Rook, origin).mask();
            assert_eq!(queen & rook, rook);
        }
    }

    #[test]
    fn bishop_sizes_match_hand_counts() {
        assert_eq!(reachable_cells(PieceKind::Bishop, cell(0, 0)).len(), 7);
        assert_eq!(reachable_cells(PieceKind::Bishop, cell(3, 3)).len(), 13);
        // corner to corner on the other diagonal
        assert_eq!(reachable_cells(PieceKind::Bishop, cell(0, 7)).len(), 7);
    }

    #[test]
    fn king_at_zero_one_reaches_zero_zero() {
        let cells = reachable_cells(PieceKind::King, cell(0, 1));
        assert!(cells.contains(cell(0, 0)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn pawn_cross_has_no_diagonals() {
        let cells: Vec<Cell> = reachable_cells(PieceKind::Pawn, cell(4, 4)).iter().collect();
        assert_eq!(
            cells,
            vec![
                cell(2, 4),
                cell(3, 4),
                cell(4, 2),
                cell(4, 3),
                cell(4, 5),
                cell(4, 6),
                cell(5, 4),
                cell(6, 4),
            ]
        );
    }

    #[test]
    fn coordinate_lookup_rejects_out_of_bounds() {
        assert_eq!(
            reachable_cells_at(PieceKind::Knight, 3, 8),
            Err(PuzzleError::OutOfBounds { row: 3, col: 8 })
        );
        assert_eq!(
            reachable_cells_at(PieceKind::Knight, 3, 3).map(CellSet::len),
            Ok(8)
        );
    }

    #[test]
    fn global_table_is_a_single_instance() {
        let a = AttackPatternTable::global() as *const AttackPatternTable;
        let b = AttackPatternTable::global() as *const AttackPatternTable;
        assert_eq!(a, b);
    }
}
