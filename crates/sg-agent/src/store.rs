//! `AgentStore` — arena of agent records indexed by `AgentId`.

use sg_core::{AgentId, Group, Pos};

use crate::Agent;

/// Owns every agent for the life of the simulation.
///
/// `agents[id.index()]` is the agent with id `id`; ids are dense
/// `0..len()`.  Agents are never removed, only relocated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Group of `id`.
    ///
    /// # Panics
    /// Panics if `id` is not in the store; grid occupants always are.
    #[inline]
    pub fn group_of(&self, id: AgentId) -> Group {
        self.agents[id.index()].group
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Record a new position for `id`.  Returns `false` if `id` is unknown.
    pub fn set_position(&mut self, id: AgentId, pos: Pos) -> bool {
        match self.agents.get_mut(id.index()) {
            Some(agent) => {
                agent.position = pos;
                true
            }
            None => false,
        }
    }

    /// Number of agents in `group`.
    pub fn count_group(&self, group: Group) -> usize {
        self.agents.iter().filter(|a| a.group == group).count()
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }
}
