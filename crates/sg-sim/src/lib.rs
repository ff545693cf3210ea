//! `sg-sim` — grid initialization and the step/solve loop.
//!
//! # One step
//!
//! ```text
//! order = grid occupants in row-major order (read once)
//! for agent in order:
//!   ① Evaluate  — count same-group neighbors against the *current* grid,
//!                 record the agent's happy flag.
//!   ② Search    — if unhappy, shuffle its neighbor cells and take the
//!                 first empty one.
//!   ③ Move      — clear the old cell, occupy the new one, update the
//!                 agent's position.  An occupied target is fatal.
//! ```
//!
//! Moves are applied immediately, so agents later in `order` see moves made
//! earlier in the same step.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sg_core::ModelConfig;
//! use sg_sim::{ModelBuilder, NoopObserver};
//!
//! let mut model = ModelBuilder::new(ModelConfig::default()).build()?;
//! let report = model.solve(500, &mut NoopObserver)?;
//! println!("{report}");
//! ```

pub mod builder;
pub mod error;
pub mod init;
pub mod model;
pub mod observer;
pub mod report;


pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use init::{init_grid, verify_layout};
pub use model::Model;
pub use observer::{NoopObserver, SimObserver, Tee};
pub use report::{RunState, SolveReport, StepStats};
