//! Remaining piece counts per kind.

use crate::puzzle::puzzle_types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Inventory {
    counts: [u32; 6],
}

impl Inventory {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Counts for repeated kinds accumulate.
    pub fn from_counts(counts: &[(PieceKind, u32)]) -> Self {
        let mut inventory = Self::default();
        for &(kind, count) in counts {
            inventory.add(kind, count);
        }
        inventory
    }

    #[inline]
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.counts[kind.index()]
    }

    #[inline]
    pub fn has(&self, kind: PieceKind) -> bool {
        self.count(kind) > 0
    }

    pub fn add(&mut self, kind: PieceKind, count: u32) {
        let slot = &mut self.counts[kind.index()];
        *slot = slot.saturating_add(count);
    }

    /// Takes one piece; `None` when none are left.
    pub(crate) fn take_one(&self, kind: PieceKind) -> Option<Self> {
        let remaining = self.count(kind).checked_sub(1)?;
        let mut next = *self;
        next.counts[kind.index()] = remaining;
        Some(next)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Kinds with at least one piece left, in `PieceKind::ALL` order.
    pub fn available_kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::ALL.into_iter().filter(move |&kind| self.has(kind))
    }

    /// (kind, count) for every kind, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, u32)> + '_ {
        PieceKind::ALL.into_iter().map(move |kind| (kind, self.count(kind)))
    }
}
