//! Step statistics and the final solve report.

use std::fmt;

/// Where a run stands relative to its step cap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Some agents unhappy and steps remain.
    Running,
    /// Every agent is happy.
    Converged,
    /// The step cap was reached without convergence.
    TimedOut,
}

impl RunState {
    pub fn classify(happy: usize, total: usize, steps: u64, itermax: u64) -> RunState {
        if happy >= total {
            RunState::Converged
        } else if steps >= itermax {
            RunState::TimedOut
        } else {
            RunState::Running
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Running   => "running",
            RunState::Converged => "converged",
            RunState::TimedOut  => "timed out",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened during one call to `Model::step`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Zero-based index of this step over the model's lifetime.
    pub step:       u64,
    /// Agents visited.
    pub evaluated:  usize,
    /// Agents that were happy when evaluated.
    pub happy:      usize,
    /// Unhappy agents that relocated.
    pub moved:      usize,
    /// Unhappy agents with no empty neighbor cell; they stayed put.
    pub no_vacancy: usize,
}

/// Outcome of `Model::solve`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub happy:   usize,
    pub total:   usize,
    /// Steps taken by this solve call.
    pub steps:   u64,
    pub itermax: u64,
    pub state:   RunState,
}

impl SolveReport {
    #[inline]
    pub fn converged(&self) -> bool {
        self.state == RunState::Converged
    }
}

/// The one-line textual summary.
impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "done, {} out of {} are happy. that took {} out of iteration max {} steps.",
            self.happy, self.total, self.steps, self.itermax
        )
    }
}
