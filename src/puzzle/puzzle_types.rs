//! Shared value types for the puzzle model.
//!
//! Cells are addressed by (row, col) with row 0 at the top of the displayed
//! board. The square index used by attack masks is `row * 8 + col`.

use std::fmt;

use crate::puzzle_errors::PuzzleError;

/// Board edge length. Only 8x8 boards exist.
pub const BOARD_SIZE: usize = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Cell value marking a placed piece. Never attacked, never placeable again.
pub const OCCUPIED: i32 = -1;

/// Cell value of an empty, placeable cell.
pub const EMPTY: i32 = 0;

/// The six placeable piece archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds in index order. Candidate generation walks kinds in this order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    /// Parse a one-letter symbol, case-insensitive.
    pub fn from_symbol(symbol: char) -> Result<Self, PuzzleError> {
        match symbol.to_ascii_uppercase() {
            'P' => Ok(PieceKind::Pawn),
            'N' => Ok(PieceKind::Knight),
            'B' => Ok(PieceKind::Bishop),
            'R' => Ok(PieceKind::Rook),
            'Q' => Ok(PieceKind::Queen),
            'K' => Ok(PieceKind::King),
            _ => Err(PuzzleError::UnknownPieceSymbol(symbol)),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Skull variants offered by the board editor, keyed by starting hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkullKind {
    White,
    Gray,
    Boss,
}

impl SkullKind {
    pub const ALL: [SkullKind; 3] = [SkullKind::White, SkullKind::Gray, SkullKind::Boss];

    #[inline]
    pub const fn hit_points(self) -> i32 {
        match self {
            SkullKind::White => 1,
            SkullKind::Gray => 2,
            SkullKind::Boss => 3,
        }
    }

    pub const fn from_hit_points(hit_points: i32) -> Option<Self> {
        match hit_points {
            1 => Some(SkullKind::White),
            2 => Some(SkullKind::Gray),
            3 => Some(SkullKind::Boss),
            _ => None,
        }
    }

    /// Letter used by board notation (`w`, `g`, `b`).
    pub const fn letter(self) -> char {
        match self {
            SkullKind::White => 'w',
            SkullKind::Gray => 'g',
            SkullKind::Boss => 'b',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'w' => Some(SkullKind::White),
            'g' => Some(SkullKind::Gray),
            'b' => Some(SkullKind::Boss),
            _ => None,
        }
    }
}

/// A board coordinate, always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Checked constructor; rejects anything outside `0..8`.
    pub fn new(row: i32, col: i32) -> Result<Self, PuzzleError> {
        if !(0..BOARD_SIZE as i32).contains(&row) || !(0..BOARD_SIZE as i32).contains(&col) {
            return Err(PuzzleError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build from a square index in `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.index()
    }

    /// Iterate every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unordered set of cells backed by a 64-bit mask (bit `row * 8 + col`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CellSet(u64);

impl CellSet {
    pub const EMPTY: CellSet = CellSet(0);

    #[inline]
    pub const fn from_mask(mask: u64) -> Self {
        Self(mask)
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    #[inline]
    pub const fn union(self, other: CellSet) -> CellSet {
        CellSet(self.0 | other.0)
    }

    /// Cells in ascending square index.
    pub fn iter(self) -> CellSetIter {
        CellSetIter(self.0)
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        CellSet(iter.into_iter().fold(0u64, |mask, cell| mask | cell.bit()))
    }
}

/// Pops set bits lowest-first.
#[derive(Debug, Clone)]
pub struct CellSetIter(u64);

impl Iterator for CellSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Cell::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellSetIter {}

/// One piece placed on one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub kind: PieceKind,
    pub cell: Cell,
}

impl Placement {
    #[inline]
    pub const fn new(kind: PieceKind, cell: Cell) -> Self {
        Self { kind, cell }
    }
}
