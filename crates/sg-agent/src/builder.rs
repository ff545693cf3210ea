//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use sg_agent::AgentStoreBuilder;
//! use sg_core::{Group, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(/*threshold=*/ 2)
//!     .group(Group::A, 50)
//!     .group(Group::B, 50)
//!     .build(&mut rng);
//!
//! assert_eq!(store.len(), 100);
//! // Every agent starts at the (0, 0) placeholder; the grid initializer
//! // assigns real positions.
//! ```

use sg_core::{AgentId, Group, Pos, SimRng};
use uuid::Builder;

use crate::{Agent, AgentStore};

/// Fluent builder for [`AgentStore`].
///
/// Agents are created group by group in the order the groups were added, so
/// ids `0..n_a` belong to the first group, `n_a..n_a+n_b` to the second, and
/// so on.
pub struct AgentStoreBuilder {
    threshold: u32,
    groups:    Vec<(Group, usize)>,
}

impl AgentStoreBuilder {
    /// Create a builder whose agents all use `threshold`.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            groups: Vec::new(),
        }
    }

    /// The standard two-group population: `n_agents / 2` agents each of
    /// [`Group::A`] and [`Group::B`].  An odd `n_agents` loses one agent.
    pub fn two_groups(threshold: u32, n_agents: usize) -> Self {
        let per_group = n_agents / 2;
        Self::new(threshold)
            .group(Group::A, per_group)
            .group(Group::B, per_group)
    }

    /// Add `count` agents of `group`.
    pub fn group(mut self, group: Group, count: usize) -> Self {
        self.groups.push((group, count));
        self
    }

    /// Total agents the builder will create.
    pub fn count(&self) -> usize {
        self.groups.iter().map(|&(_, n)| n).sum()
    }

    /// Construct the store.  Uids are drawn from `rng` so a seeded run
    /// reproduces them exactly.
    pub fn build(self, rng: &mut SimRng) -> AgentStore {
        let mut agents = Vec::with_capacity(self.count());
        for (group, count) in self.groups {
            for _ in 0..count {
                let id = AgentId(agents.len() as u32);
                let uid = Builder::from_random_bytes(rng.random::<u128>().to_le_bytes()).into_uuid();
                agents.push(Agent::with_uid(id, uid, group, Pos::default(), self.threshold));
            }
        }
        AgentStore::from_agents(agents)
    }
}
