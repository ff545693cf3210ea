//! Neighbor evaluation and relocation search.
//!
//! All three operations read the grid as it is *now*.  The engine calls them
//! agent by agent while mutating the grid, so an agent visited later in a
//! step sees the moves made by agents visited earlier.

use sg_core::{Pos, SimRng};
use sg_grid::Grid;

use crate::{Agent, AgentStore};

/// Result of evaluating one agent's neighborhood.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Neighbor cells occupied by an agent of the same group.
    pub similar:  u32,
    /// `similar >= threshold`.
    pub is_happy: bool,
}

/// What an agent wants to do after evaluating its neighborhood.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relocation {
    /// Happy; stays where it is.
    Stay,
    /// Unhappy; the first empty cell in its randomized candidate order.
    MoveTo(Pos),
    /// Unhappy, but every neighbor cell is occupied.  Stays put this step.
    NoVacancy,
}

impl Relocation {
    /// The move target, if any.
    #[inline]
    pub fn target(self) -> Option<Pos> {
        match self {
            Relocation::MoveTo(p) => Some(p),
            Relocation::Stay | Relocation::NoVacancy => None,
        }
    }
}

/// Distinct clamped Moore neighbors of `agent`, excluding its own cell, in
/// ascending `(row, col)` order.
pub fn neighbor_cells(agent: &Agent, grid: &Grid) -> Vec<Pos> {
    agent.position.moore_neighbors(grid.size())
}

/// [`neighbor_cells`] in a uniformly random order drawn from `rng`.
///
/// The order is the priority used when searching for a vacant cell.
pub fn get_locs(agent: &Agent, grid: &Grid, rng: &mut SimRng) -> Vec<Pos> {
    let mut locs = neighbor_cells(agent, grid);
    rng.shuffle(&mut locs);
    locs
}

/// Count same-group neighbors and decide happiness.
///
/// Pure: the count does not depend on visiting order, so no randomness is
/// consumed.
pub fn eval_neighbors(agent: &Agent, grid: &Grid, store: &AgentStore) -> Evaluation {
    let similar = neighbor_cells(agent, grid)
        .into_iter()
        .filter_map(|p| grid.occupant(p))
        .filter_map(|id| store.get(id))
        .filter(|other| other.group == agent.group)
        .count() as u32;
    Evaluation {
        similar,
        is_happy: similar >= agent.threshold,
    }
}

/// Evaluate `agent` and, if unhappy, pick where it should move.
///
/// A happy agent yields [`Relocation::Stay`] without touching `rng`.  An
/// unhappy one draws a fresh candidate order and takes the first empty cell,
/// or [`Relocation::NoVacancy`] when there is none.
pub fn calculate_new_position(
    agent: &Agent,
    grid:  &Grid,
    store: &AgentStore,
    rng:   &mut SimRng,
) -> (Evaluation, Relocation) {
    let eval = eval_neighbors(agent, grid, store);
    if eval.is_happy {
        return (eval, Relocation::Stay);
    }
    let relocation = get_locs(agent, grid, rng)
        .into_iter()
        .find(|&p| grid.is_vacant(p))
        .map_or(Relocation::NoVacancy, Relocation::MoveTo);
    (eval, relocation)
}
