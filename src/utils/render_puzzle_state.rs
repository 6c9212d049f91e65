//! Terminal-oriented board renderer.
//!
//! Skulls show their remaining hit points, placed pieces show their chess
//! glyph, empty cells show `·`. Row 0 is printed first as rank 8.

use crate::puzzle::puzzle_state::PuzzleState;
use crate::puzzle::puzzle_types::{Cell, PieceKind, BOARD_SIZE, OCCUPIED};

pub fn render_puzzle_state(state: &PuzzleState) -> String {
    let mut placed: [Option<PieceKind>; 64] = [None; 64];
    for placement in state.history() {
        placed[placement.cell.index()] = Some(placement.kind);
    }

    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let cell = Cell::from_index(row * BOARD_SIZE + col);
            out.push(cell_char(state.board().get(cell), placed[cell.index()]));
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

fn cell_char(value: i32, placed: Option<PieceKind>) -> char {
    match (value, placed) {
        (OCCUPIED, Some(kind)) => piece_to_unicode(kind),
        (OCCUPIED, None) => 'x',
        (1..=9, _) => char::from(b'0' + value as u8),
        (v, _) if v > 9 => '+',
        _ => '·',
    }
}

pub fn piece_to_unicode(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => '♙',
        PieceKind::Knight => '♘',
        PieceKind::Bishop => '♗',
        PieceKind::Rook => '♖',
        PieceKind::Queen => '♕',
        PieceKind::King => '♔',
    }
}
