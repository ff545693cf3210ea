//! `sg-grid` — the square occupancy grid.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`cell`]      | `Cell` — `Empty` or `Occupied(AgentId)`                   |
//! | [`grid`]      | `Grid` — row-major `size × size` cell storage             |
//! | [`snapshot`]  | `GridSnapshot` — read-only per-cell group view            |
//! | [`error`]     | `GridError`, `GridResult<T>`                              |
//!
//! The grid stores agent ids only.  Agent records live in
//! `sg_agent::AgentStore`; the id is the index into it.

pub mod cell;
pub mod error;
pub mod grid;
pub mod snapshot;


pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use snapshot::GridSnapshot;
