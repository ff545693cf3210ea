//! `sg-core` — foundational types for the Schelling segregation simulator.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`pos`]         | `Pos`, Moore offsets, clamped neighbor cells          |
//! | [`group`]       | `Group` membership label                              |
//! | [`rng`]         | `SimRng` (seeded, single-threaded)                    |
//! | [`config`]      | `ModelConfig` and its validation                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod group;
pub mod ids;
pub mod pos;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ModelConfig;
pub use error::{CoreError, CoreResult};
pub use group::Group;
pub use ids::AgentId;
pub use pos::{MOORE_OFFSETS, Pos};
pub use rng::SimRng;
