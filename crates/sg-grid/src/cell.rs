//! Grid cell contents.

use sg_core::AgentId;

/// One grid cell: empty, or holding exactly one agent by id.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(AgentId),
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupant's id, or `None` for an empty cell.
    #[inline]
    pub fn occupant(self) -> Option<AgentId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }
}

impl From<Option<AgentId>> for Cell {
    fn from(value: Option<AgentId>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}
