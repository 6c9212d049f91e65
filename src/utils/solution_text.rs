//! Human-readable solution listing.

use crate::puzzle::puzzle_types::Placement;
use crate::utils::algebraic::cell_to_algebraic;

/// One line per step: `Step 1: place Queen at d5`.
pub fn describe_solution(placements: &[Placement]) -> Vec<String> {
    placements
        .iter()
        .enumerate()
        .map(|(idx, placement)| {
            format!(
                "Step {}: place {} at {}",
                idx + 1,
                placement.kind,
                cell_to_algebraic(placement.cell)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::puzzle_types::{Cell, PieceKind};

    #[test]
    fn steps_are_numbered_from_one() {
        let placements = [
            Placement::new(PieceKind::Queen, Cell::new(3, 3).expect("in bounds")),
            Placement::new(PieceKind::King, Cell::new(0, 1).expect("in bounds")),
        ];
        assert_eq!(
            describe_solution(&placements),
            vec![
                "Step 1: place Queen at d5".to_owned(),
                "Step 2: place King at b8".to_owned(),
            ]
        );
        assert!(describe_solution(&[]).is_empty());
    }
}
