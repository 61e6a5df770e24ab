//! Rosters already produced during one optimisation run.

use std::collections::BTreeSet;

use crate::{PlayerId, Roster};

/// Identifier sets of previously produced rosters, in production order.
///
/// Each entry becomes an exclusion constraint for later solves, forbidding an
/// exact repeat of that roster. The set lives for a single optimisation run.
///
/// # Examples
/// ```
/// use lineup_core::ExclusionSet;
///
/// let exclusions = ExclusionSet::new();
/// assert!(exclusions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    rosters: Vec<BTreeSet<PlayerId>>,
}

impl ExclusionSet {
    /// Create an empty exclusion set.
    pub const fn new() -> Self {
        Self {
            rosters: Vec::new(),
        }
    }

    /// Record a produced roster.
    pub fn record(&mut self, roster: &Roster) {
        self.rosters.push(roster.player_ids());
    }

    /// Whether `roster` repeats a recorded roster exactly.
    pub fn contains(&self, roster: &Roster) -> bool {
        let ids = roster.player_ids();
        self.rosters.iter().any(|excluded| *excluded == ids)
    }

    /// Iterate over the recorded identifier sets.
    pub fn iter(&self) -> impl Iterator<Item = &BTreeSet<PlayerId>> {
        self.rosters.iter()
    }

    /// Number of recorded rosters.
    pub fn len(&self) -> usize {
        self.rosters.len()
    }

    /// Whether no roster has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rosters.is_empty()
    }
}
