//! Grid initializer: random placement of two equal groups.

use sg_agent::{AgentStore, AgentStoreBuilder};
use sg_core::{ModelConfig, SimRng};
use sg_grid::{Cell, Grid};
use tracing::warn;

use crate::{SimError, SimResult};

/// Build the starting grid and agent arena for `config`.
///
/// Creates `n_agents / 2` agents of each group plus enough empty markers to
/// fill `size * size` cells, shuffles the combined list uniformly, and lays
/// it out row-major.  Each agent's position is then set to the cell that
/// holds it.
///
/// # Errors
///
/// `SimError::InvalidConfiguration` if `size == 0` or `n_agents` exceeds
/// the grid's capacity.
pub fn init_grid(config: &ModelConfig, rng: &mut SimRng) -> SimResult<(Grid, AgentStore)> {
    config.validate()?;
    if config.n_agents % 2 == 1 {
        warn!(
            n_agents = config.n_agents,
            placed = config.placed_agents(),
            "odd agent count: the remainder agent is dropped"
        );
    }

    let mut agents = AgentStoreBuilder::two_groups(config.threshold, config.n_agents).build(rng);

    let mut cells: Vec<Cell> = agents.agent_ids().map(Cell::Occupied).collect();
    cells.resize(config.capacity(), Cell::Empty);
    rng.shuffle(&mut cells);

    let grid = Grid::from_cells(config.size, cells)?;
    for (pos, id) in grid.occupied() {
        agents.set_position(id, pos);
    }
    Ok((grid, agents))
}

/// Check that `grid` and `agents` describe the same placement: every agent
/// sits on exactly one cell and that cell is its recorded position.
pub fn verify_layout(grid: &Grid, agents: &AgentStore) -> SimResult<()> {
    let mut seen = vec![false; agents.len()];
    for (pos, id) in grid.occupied() {
        let agent = agents
            .get(id)
            .ok_or_else(|| SimError::InvariantViolation(format!("{id} at {pos} is not in the agent store")))?;
        if seen[id.index()] {
            return Err(SimError::InvariantViolation(format!("{id} occupies more than one cell")));
        }
        seen[id.index()] = true;
        if agent.position != pos {
            return Err(SimError::InvariantViolation(format!(
                "{id} is recorded at {} but the grid holds it at {pos}",
                agent.position
            )));
        }
    }
    if let Some(missing) = seen.iter().position(|s| !s) {
        return Err(SimError::InvariantViolation(format!(
            "AgentId({missing}) is not on the grid"
        )));
    }
    Ok(())
}
