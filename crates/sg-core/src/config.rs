//! Model configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to `ModelBuilder`.

use crate::{CoreError, CoreResult};

/// Top-level model configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Minimum number of same-group neighbors an agent needs to be happy.
    pub threshold: u32,

    /// Side length of the square grid.
    pub size: usize,

    /// Number of agents to place.  Split evenly between the two groups;
    /// an odd count loses its remainder agent.
    pub n_agents: usize,

    /// Step cap for `Model::solve`.
    pub itermax: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Emit a grid snapshot to the observer after every step.
    pub graphs: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            threshold: 1,
            size:      25,
            n_agents:  100,
            itermax:   500,
            seed:      42,
            graphs:    false,
        }
    }
}

impl ModelConfig {
    /// Number of cells on the grid.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// Agents per group after integer division.
    #[inline]
    pub fn agents_per_group(&self) -> usize {
        self.n_agents / 2
    }

    /// Agents actually placed: `2 * (n_agents / 2)`.
    #[inline]
    pub fn placed_agents(&self) -> usize {
        self.agents_per_group() * 2
    }

    /// Reject configurations the initializer cannot satisfy.
    pub fn validate(&self) -> CoreResult<()> {
        if self.size == 0 {
            return Err(CoreError::EmptyGrid);
        }
        let capacity = self
            .size
            .checked_mul(self.size)
            .ok_or_else(|| CoreError::InvalidConfiguration(format!("grid size {} overflows", self.size)))?;
        if self.n_agents > capacity {
            return Err(CoreError::TooManyAgents {
                n_agents: self.n_agents,
                size:     self.size,
                capacity,
            });
        }
        if self.placed_agents() > u32::MAX as usize {
            return Err(CoreError::InvalidConfiguration(format!(
                "{} agents exceed the AgentId range",
                self.n_agents
            )));
        }
        Ok(())
    }
}
