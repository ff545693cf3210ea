//! Group membership shared by the agent, grid, and output crates.

use std::fmt;

/// The group an agent belongs to.
///
/// The model places two groups, [`Group::A`] and [`Group::B`], but the label
/// is an open `u8` so additional groups need no type change.  `0` is never
/// used as a group so renderers can reserve it for empty cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group(pub u8);

impl Group {
    pub const A: Group = Group(1);
    pub const B: Group = Group(2);

    /// Numeric label, useful for CSV column values.
    #[inline]
    pub fn label(self) -> u8 {
        self.0
    }

    /// Human-readable name: `A`, `B`, or `G<n>` for any other group.
    pub fn name(self) -> String {
        match self {
            Group::A => "A".to_owned(),
            Group::B => "B".to_owned(),
            Group(n) => format!("G{n}"),
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::A
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
