use sg_core::CoreError;
use sg_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    InvalidConfiguration(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// The grid and the agent store disagree, or a move targeted an occupied
    /// cell.  Continuing could break the single-occupant invariant, so the
    /// run must stop.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type SimResult<T> = Result<T, SimError>;
