//! Grid coordinates and the clamped Moore neighborhood.
//!
//! Neighbor coordinates that fall off the grid are clamped back to the
//! nearest valid index, not wrapped or discarded.  Clamping collapses some
//! offsets onto the same cell (or onto the agent's own cell), so after
//! deduplication a corner has 3 distinct neighbors and an edge has 5.

use std::fmt;

/// The 8 Moore-neighborhood offsets as `(d_row, d_col)`.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// A `(row, col)` cell coordinate on a square grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major flat index on a grid of side `size`.
    #[inline]
    pub fn flat_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    #[inline]
    pub fn from_flat_index(index: usize, size: usize) -> Self {
        Self { row: index / size, col: index % size }
    }

    /// `true` if both axes lie in `[0, size-1]`.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Apply `(d_row, d_col)` and clamp each axis independently to `[0, size-1]`.
    ///
    /// `size` must be at least 1.
    #[inline]
    pub fn offset_clamped(self, d_row: isize, d_col: isize, size: usize) -> Pos {
        let max = size.saturating_sub(1) as isize;
        let row = (self.row as isize + d_row).clamp(0, max) as usize;
        let col = (self.col as isize + d_col).clamp(0, max) as usize;
        Pos { row, col }
    }

    /// Distinct clamped Moore neighbors of `self`, excluding `self`.
    ///
    /// Returned in ascending `(row, col)` order; callers that need a random
    /// search order shuffle the result.
    pub fn moore_neighbors(self, size: usize) -> Vec<Pos> {
        let mut cells: Vec<Pos> = MOORE_OFFSETS
            .iter()
            .map(|&(dr, dc)| self.offset_clamped(dr, dc, size))
            .filter(|&p| p != self)
            .collect();
        cells.sort_unstable();
        cells.dedup();
        cells
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Pos { row, col }
    }
}
