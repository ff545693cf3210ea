//! Observer trait for progress reporting, rendering, and archiving.

use sg_agent::AgentStore;
use sg_grid::{Grid, GridSnapshot};

use crate::{SolveReport, StepStats};

/// Callbacks invoked by [`Model::solve`][crate::Model::solve] between steps.
///
/// Never called while a step is in progress, so every grid an observer sees
/// is consistent.  All methods have default no-op implementations so
/// implementors only need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, stats: &StepStats) {
///         if stats.step % self.interval == 0 {
///             println!("step {}: {} happy, {} moved", stats.step, stats.happy, stats.moved);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every step.
    fn on_step_end(&mut self, _stats: &StepStats) {}

    /// Called after every step when `ModelConfig::graphs` is set.
    ///
    /// `step` is the zero-based index of the step just completed.
    fn on_snapshot(&mut self, _step: u64, _snapshot: &GridSnapshot) {}

    /// Called once when `solve` returns successfully, with the final grid.
    fn on_solve_end(&mut self, _report: &SolveReport, _grid: &Grid, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `solve`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forwards every callback to two observers, `first` then `second`.
pub struct Tee<A, B> {
    pub first:  A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: SimObserver, B: SimObserver> SimObserver for Tee<A, B> {
    fn on_step_end(&mut self, stats: &StepStats) {
        self.first.on_step_end(stats);
        self.second.on_step_end(stats);
    }

    fn on_snapshot(&mut self, step: u64, snapshot: &GridSnapshot) {
        self.first.on_snapshot(step, snapshot);
        self.second.on_snapshot(step, snapshot);
    }

    fn on_solve_end(&mut self, report: &SolveReport, grid: &Grid, agents: &AgentStore) {
        self.first.on_solve_end(report, grid, agents);
        self.second.on_solve_end(report, grid, agents);
    }
}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_step_end(&mut self, stats: &StepStats) {
        (**self).on_step_end(stats);
    }

    fn on_snapshot(&mut self, step: u64, snapshot: &GridSnapshot) {
        (**self).on_snapshot(step, snapshot);
    }

    fn on_solve_end(&mut self, report: &SolveReport, grid: &Grid, agents: &AgentStore) {
        (**self).on_solve_end(report, grid, agents);
    }
}

/// `None` ignores every callback; `Some` forwards.  Lets optional outputs be
/// combined with [`Tee`] without boxing.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_step_end(&mut self, stats: &StepStats) {
        if let Some(o) = self {
            o.on_step_end(stats);
        }
    }

    fn on_snapshot(&mut self, step: u64, snapshot: &GridSnapshot) {
        if let Some(o) = self {
            o.on_snapshot(step, snapshot);
        }
    }

    fn on_solve_end(&mut self, report: &SolveReport, grid: &Grid, agents: &AgentStore) {
        if let Some(o) = self {
            o.on_solve_end(report, grid, agents);
        }
    }
}
