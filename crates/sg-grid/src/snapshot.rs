//! `GridSnapshot` — what renderers and archivers see.

use std::fmt;

use sg_core::{Group, Pos};

/// A detached copy of the grid reduced to `empty | group` per cell.
///
/// Taken between steps, so it never reflects a half-applied step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub size:  usize,
    /// Row-major; `None` is an empty cell.
    pub cells: Vec<Option<Group>>,
}

impl GridSnapshot {
    pub fn new(size: usize, cells: Vec<Option<Group>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Group at `pos`, `None` if empty or off-grid.
    pub fn get(&self, pos: Pos) -> Option<Group> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.cells[pos.flat_index(self.size)]
    }

    /// Iterator over rows, each a slice of `size` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Group>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of cells holding an agent of `group`.
    pub fn count(&self, group: Group) -> usize {
        self.cells.iter().filter(|c| **c == Some(group)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }
}

/// One character per cell: `.` for empty, the group name otherwise.
impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    None => f.write_str(".")?,
                    Some(g) => write!(f, "{g}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
