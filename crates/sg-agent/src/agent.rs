//! The `Agent` record.

use std::fmt;

use sg_core::{AgentId, Group, Pos};
use uuid::Uuid;

/// One resident of the grid.
///
/// Only durable fields live here.  `position` is kept consistent with the
/// grid by the simulation engine, which is the only writer after
/// initialization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Arena index in `AgentStore`; what the grid stores.
    pub id: AgentId,

    /// Globally unique identifier, stable across runs with the same seed
    /// when created through `AgentStoreBuilder`.
    pub uid: Uuid,

    pub group: Group,

    /// Current cell.  `(0, 0)` placeholder until the initializer places it.
    pub position: Pos,

    /// Minimum number of same-group neighbors needed to be happy.
    pub threshold: u32,
}

impl Agent {
    /// Create an agent with a freshly generated (v4) uid.
    pub fn new(id: AgentId, group: Group, position: Pos, threshold: u32) -> Self {
        Self::with_uid(id, Uuid::new_v4(), group, position, threshold)
    }

    pub fn with_uid(id: AgentId, uid: Uuid, group: Group, position: Pos, threshold: u32) -> Self {
        Self { id, uid, group, position, threshold }
    }
}

impl Default for Agent {
    /// A group-A agent at `(0, 0)` with threshold 1.
    fn default() -> Self {
        Self::new(AgentId(0), Group::A, Pos::default(), 1)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Agent(threshold={}, position={}, group={}, id='{}')",
            self.threshold, self.position, self.group, self.uid
        )
    }
}
