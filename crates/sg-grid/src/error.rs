use sg_core::{AgentId, Pos};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos} is outside a {size}x{size} grid")]
    OutOfBounds { pos: Pos, size: usize },

    #[error("cell {pos} is already occupied by {occupant}")]
    Occupied { pos: Pos, occupant: AgentId },

    #[error("cell {0} is empty")]
    Vacant(Pos),

    #[error("{got} cells supplied for a {size}x{size} grid")]
    CellCountMismatch { size: usize, got: usize },
}

pub type GridResult<T> = Result<T, GridError>;
