//! Fluent builder for constructing a [`Model`].

use sg_agent::{AgentStore, eval_neighbors};
use sg_core::{CoreError, ModelConfig, SimRng};
use sg_grid::Grid;
use tracing::debug;

use crate::{Model, SimResult, init_grid, verify_layout};

/// Fluent builder for [`Model`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                           |
/// |-----------------|---------------------------------------------------|
/// | `.layout(g, a)` | Random placement via [`init_grid`]                |
///
/// # Example
///
/// ```rust,ignore
/// let mut model = ModelBuilder::new(ModelConfig { size: 10, n_agents: 40, ..Default::default() })
///     .build()?;
/// model.solve(200, &mut NoopObserver)?;
/// ```
pub struct ModelBuilder {
    config: ModelConfig,
    layout: Option<(Grid, AgentStore)>,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self { config, layout: None }
    }

    /// Start from an explicit placement instead of a random one.
    ///
    /// The grid's side must equal `config.size`; every agent must sit on the
    /// cell its position names.  `config.n_agents` is ignored in favour of
    /// the store's length.
    pub fn layout(mut self, grid: Grid, agents: AgentStore) -> Self {
        self.layout = Some((grid, agents));
        self
    }

    /// Validate inputs, place agents, evaluate everyone once, and return a
    /// ready-to-run [`Model`].
    pub fn build(self) -> SimResult<Model> {
        let mut rng = SimRng::new(self.config.seed);

        let (grid, agents) = match self.layout {
            Some((grid, agents)) => {
                if grid.size() != self.config.size {
                    return Err(CoreError::InvalidConfiguration(format!(
                        "layout grid is {}x{} but config.size is {}",
                        grid.size(),
                        grid.size(),
                        self.config.size
                    ))
                    .into());
                }
                verify_layout(&grid, &agents)?;
                (grid, agents)
            }
            None => init_grid(&self.config, &mut rng)?,
        };

        let happy: Vec<bool> = agents
            .iter()
            .map(|a| eval_neighbors(a, &grid, &agents).is_happy)
            .collect();

        let mut model = Model::from_parts(self.config, grid, agents, rng, happy);
        model.count_happy();
        debug!(
            size = model.config.size,
            agents = model.total_agents(),
            happy = model.n_happy(),
            "model built"
        );
        Ok(model)
    }
}
