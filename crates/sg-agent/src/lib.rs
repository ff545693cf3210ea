//! `sg-agent` — agent records and the per-agent neighbor logic.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`agent`]     | `Agent` — durable identity and state only                     |
//! | [`store`]     | `AgentStore` — arena indexed by `AgentId`                     |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction, seeded uids)        |
//! | [`eval`]      | `eval_neighbors`, `get_locs`, `calculate_new_position`        |
//!
//! # Design notes
//!
//! An agent holds no derived state.  Whether it is happy, how many similar
//! neighbors it has, and where it might move are returned by the functions
//! in [`eval`] as values ([`Evaluation`], [`Relocation`]) computed against
//! the grid as it is at the moment of the call.

pub mod agent;
pub mod builder;
pub mod eval;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentStoreBuilder;
pub use eval::{Evaluation, Relocation, calculate_new_position, eval_neighbors, get_locs, neighbor_cells};
pub use store::AgentStore;
