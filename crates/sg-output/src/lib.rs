//! `sg-output` — simulation output for the Schelling segregation simulator.
//!
//! | Feature   | Provides                                                      |
//! |-----------|---------------------------------------------------------------|
//! | *(none)*  | CSV: `step_summaries.csv`, `final_grid.csv`                   |
//! | `png`     | `render_grid` (snapshot → image) and `GraphArchiver`          |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sg_sim::SimObserver`.  Only the
//! final grid is persisted as data; per-step grids exist only as archived
//! images.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! model.solve(500, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "png")]
pub mod archive;

#[cfg(feature = "png")]
pub mod render;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{GridCellRow, StepSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "png")]
pub use archive::GraphArchiver;

#[cfg(feature = "png")]
pub use render::{RenderOptions, color_for, render_grid};
