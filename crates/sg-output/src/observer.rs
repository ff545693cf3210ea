//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sg_agent::AgentStore;
use sg_grid::Grid;
use sg_sim::{SimObserver, SolveReport, StepStats};
use tracing::warn;

use crate::row::{GridCellRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes step summaries and the final grid to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `model.solve()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `model.solve()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, stats: &StepStats) {
        let row = StepSummaryRow {
            step:       stats.step,
            happy:      stats.happy as u64,
            total:      stats.evaluated as u64,
            moved:      stats.moved as u64,
            no_vacancy: stats.no_vacancy as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_solve_end(&mut self, _report: &SolveReport, grid: &Grid, agents: &AgentStore) {
        let rows: Vec<GridCellRow> = grid
            .occupied()
            .filter_map(|(pos, id)| {
                agents.get(id).map(|agent| GridCellRow {
                    row:       pos.row as u32,
                    col:       pos.col as u32,
                    group:     agent.group.label(),
                    agent_id:  id.0,
                    agent_uid: agent.uid,
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_final_grid(&rows);
            self.store_err(result);
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
