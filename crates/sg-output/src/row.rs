//! Plain data row types written by output backends.

use uuid::Uuid;

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:       u64,
    /// Happy agents after the step (last evaluated flags).
    pub happy:      u64,
    pub total:      u64,
    pub moved:      u64,
    pub no_vacancy: u64,
}

/// One occupied cell of the final grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCellRow {
    pub row:       u32,
    pub col:       u32,
    /// Group label (`1` = A, `2` = B).
    pub group:     u8,
    pub agent_id:  u32,
    pub agent_uid: Uuid,
}
