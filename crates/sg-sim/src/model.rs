//! The `Model` struct and its step loop.

use std::fmt;

use sg_agent::{AgentStore, Evaluation, Relocation, calculate_new_position, eval_neighbors};
use sg_core::{AgentId, ModelConfig, Pos, SimRng};
use sg_grid::{Grid, GridSnapshot};
use tracing::{debug, info, trace};

use crate::{RunState, SimError, SimObserver, SimResult, SolveReport, StepStats, verify_layout};

/// The simulation engine.
///
/// Owns the grid, the agent arena, the run's RNG, and the most recent happy
/// flag of every agent.  The flags are written only when an agent is
/// evaluated; [`count_happy`](Self::count_happy) reads them without
/// re-evaluating.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model {
    /// Configuration the model was built with.
    pub config: ModelConfig,

    grid:       Grid,
    agents:     AgentStore,
    rng:        SimRng,

    /// Last evaluated happy flag, indexed by `AgentId`.
    happy:      Vec<bool>,
    n_happy:    usize,

    /// Steps taken over the model's lifetime (across `solve` calls).
    steps:      u64,
}

impl Model {
    pub(crate) fn from_parts(
        config: ModelConfig,
        grid:   Grid,
        agents: AgentStore,
        rng:    SimRng,
        happy:  Vec<bool>,
    ) -> Self {
        Self {
            config,
            grid,
            agents,
            rng,
            happy,
            n_happy: 0,
            steps: 0,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Agents on the grid.  May be one less than `config.n_agents` when
    /// that is odd.
    #[inline]
    pub fn total_agents(&self) -> usize {
        self.agents.len()
    }

    /// Happy count as of the last [`count_happy`](Self::count_happy).
    #[inline]
    pub fn n_happy(&self) -> usize {
        self.n_happy
    }

    /// Last evaluated happy flag of `agent`.
    #[inline]
    pub fn is_happy(&self, agent: AgentId) -> bool {
        self.happy.get(agent.index()).copied().unwrap_or(false)
    }

    #[inline]
    pub fn steps_taken(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.n_happy >= self.total_agents()
    }

    /// Read-only `empty | group` view of the grid for renderers.
    pub fn grid_snapshot(&self) -> GridSnapshot {
        self.grid.snapshot(|id| self.agents.group_of(id))
    }

    /// Re-check that grid occupancy and agent positions agree.
    pub fn check_invariants(&self) -> SimResult<()> {
        verify_layout(&self.grid, &self.agents)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one step: visit every agent once in row-major order, moving the
    /// unhappy ones.
    ///
    /// # Errors
    ///
    /// `SimError::InvariantViolation` if a move target is occupied or the
    /// grid and agent store disagree.  The model must not be stepped again
    /// after an error.
    pub fn step(&mut self) -> SimResult<StepStats> {
        let order = self.grid.agents_row_major();
        let mut stats = StepStats {
            step: self.steps,
            evaluated: order.len(),
            ..StepStats::default()
        };

        for id in order {
            let agent = self.agents.get(id).ok_or_else(|| {
                SimError::InvariantViolation(format!("{id} is on the grid but not in the agent store"))
            })?;
            let from = agent.position;
            let (eval, relocation) = calculate_new_position(agent, &self.grid, &self.agents, &mut self.rng);
            self.happy[id.index()] = eval.is_happy;

            match relocation {
                Relocation::Stay => stats.happy += 1,
                Relocation::NoVacancy => {
                    stats.no_vacancy += 1;
                    trace!(agent = %id, pos = %from, similar = eval.similar, "unhappy, no vacant neighbor");
                }
                Relocation::MoveTo(to) => {
                    self.relocate(id, from, to)?;
                    stats.moved += 1;
                    trace!(agent = %id, from = %from, to = %to, similar = eval.similar, "moved");
                }
            }
        }

        self.steps += 1;
        debug!(
            step = stats.step,
            happy = stats.happy,
            moved = stats.moved,
            no_vacancy = stats.no_vacancy,
            "step complete"
        );
        Ok(stats)
    }

    /// Count agents whose last evaluated flag is happy, scanning the grid.
    pub fn count_happy(&mut self) -> usize {
        self.n_happy = self
            .grid
            .occupied()
            .filter(|&(_, id)| self.happy[id.index()])
            .count();
        self.n_happy
    }

    /// Step until every agent is happy or `itermax` steps have run.
    ///
    /// Observer hooks fire after each step (and `on_snapshot` too when
    /// `config.graphs` is set).  A model that is already converged returns
    /// without stepping.
    pub fn solve<O: SimObserver>(&mut self, itermax: u64, observer: &mut O) -> SimResult<SolveReport> {
        let total = self.total_agents();
        info!(
            size = self.config.size,
            agents = total,
            threshold = self.config.threshold,
            itermax,
            "solving"
        );

        let mut steps = 0;
        while self.n_happy < total && steps < itermax {
            let stats = self.step()?;
            steps += 1;
            self.count_happy();
            observer.on_step_end(&stats);
            if self.config.graphs {
                observer.on_snapshot(stats.step, &self.grid_snapshot());
            }
        }

        let report = SolveReport {
            happy: self.n_happy,
            total,
            steps,
            itermax,
            state: RunState::classify(self.n_happy, total, steps, itermax),
        };
        info!(state = %report.state, "{report}");
        observer.on_solve_end(&report, &self.grid, &self.agents);
        Ok(report)
    }

    /// [`solve`](Self::solve) with `config.itermax`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SolveReport> {
        self.solve(self.config.itermax, observer)
    }

    /// Re-evaluate `agent` against the current grid without moving it or
    /// touching its stored flag.
    pub fn evaluate(&self, agent: AgentId) -> Option<Evaluation> {
        self.agents.get(agent).map(|a| eval_neighbors(a, &self.grid, &self.agents))
    }

    fn relocate(&mut self, id: AgentId, from: Pos, to: Pos) -> SimResult<()> {
        if let Some(occupant) = self.grid.occupant(to) {
            return Err(SimError::InvariantViolation(format!(
                "{id} targeted {to}, already occupied by {occupant}"
            )));
        }
        if self.grid.occupant(from) != Some(id) {
            return Err(SimError::InvariantViolation(format!(
                "{id} is recorded at {from} but the grid disagrees"
            )));
        }
        self.grid.move_agent(from, to)?;
        self.agents.set_position(id, to);
        Ok(())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model(size={}, agents={}, threshold={}, happy={}, steps={})",
            self.config.size,
            self.total_agents(),
            self.config.threshold,
            self.n_happy,
            self.steps
        )
    }
}
