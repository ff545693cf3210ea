//! The `Grid` — row-major `size × size` occupancy storage.

use sg_core::{AgentId, Group, Pos};

use crate::{Cell, GridError, GridResult, GridSnapshot};

/// Fixed-size square grid of [`Cell`]s, mutated in place.
///
/// Cells are stored row-major in one `Vec`; `cells[row * size + col]` is the
/// cell at `(row, col)`.  Every mutating method preserves the single-occupant
/// invariant: [`place`](Self::place) and [`move_agent`](Self::move_agent)
/// refuse an occupied target instead of overwriting it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size:  usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-empty grid of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build a grid from row-major cells.  `cells.len()` must be `size * size`.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> GridResult<Self> {
        if cells.len() != size * size {
            return Err(GridError::CellCountMismatch { size, got: cells.len() });
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.in_bounds(self.size)
    }

    pub fn get(&self, pos: Pos) -> GridResult<Cell> {
        self.check(pos)?;
        Ok(self.cells[pos.flat_index(self.size)])
    }

    /// `true` if `pos` is on the grid and empty.
    #[inline]
    pub fn is_vacant(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[pos.flat_index(self.size)].is_empty()
    }

    /// The agent at `pos`, or `None` if empty or off-grid.
    #[inline]
    pub fn occupant(&self, pos: Pos) -> Option<AgentId> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[pos.flat_index(self.size)].occupant()
    }

    /// Put `agent` into the empty cell at `pos`.
    pub fn place(&mut self, pos: Pos, agent: AgentId) -> GridResult<()> {
        let idx = self.check(pos)?;
        if let Cell::Occupied(occupant) = self.cells[idx] {
            return Err(GridError::Occupied { pos, occupant });
        }
        self.cells[idx] = Cell::Occupied(agent);
        Ok(())
    }

    /// Empty the cell at `pos`, returning its former occupant.
    pub fn clear(&mut self, pos: Pos) -> GridResult<Option<AgentId>> {
        let idx = self.check(pos)?;
        let previous = self.cells[idx].occupant();
        self.cells[idx] = Cell::Empty;
        Ok(previous)
    }

    /// Move the occupant of `from` into the empty cell `to`.
    ///
    /// On error the grid is left unchanged.
    pub fn move_agent(&mut self, from: Pos, to: Pos) -> GridResult<AgentId> {
        let src = self.check(from)?;
        let dst = self.check(to)?;
        let agent = self.cells[src].occupant().ok_or(GridError::Vacant(from))?;
        if let Cell::Occupied(occupant) = self.cells[dst] {
            return Err(GridError::Occupied { pos: to, occupant });
        }
        self.cells[src] = Cell::Empty;
        self.cells[dst] = Cell::Occupied(agent);
        Ok(agent)
    }

    /// Occupied cells in row-major (flattening) order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, AgentId)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.occupant().map(|id| (Pos::from_flat_index(i, size), id)))
    }

    /// Agent ids in row-major order, the per-step visiting order.
    pub fn agents_row_major(&self) -> Vec<AgentId> {
        self.cells.iter().filter_map(|c| c.occupant()).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// Read-only per-cell group view.  `group_of` maps an occupant to its group.
    pub fn snapshot<F>(&self, group_of: F) -> GridSnapshot
    where
        F: Fn(AgentId) -> Group,
    {
        let cells = self.cells.iter().map(|c| c.occupant().map(&group_of)).collect();
        GridSnapshot::new(self.size, cells)
    }

    fn check(&self, pos: Pos) -> GridResult<usize> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds { pos, size: self.size });
        }
        Ok(pos.flat_index(self.size))
    }
}
