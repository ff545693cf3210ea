//! Configuration-time error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating a model configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid configuration: grid size must be at least 1")]
    EmptyGrid,

    #[error("invalid configuration: {n_agents} agents do not fit on a {size}x{size} grid ({capacity} cells)")]
    TooManyAgents {
        n_agents: usize,
        size:     usize,
        capacity: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for `sg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
