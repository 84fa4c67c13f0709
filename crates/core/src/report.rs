use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

use crate::group::SuffixGroups;

/// One ranked naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Shared suffix of the group.
    pub suffix: String,
    /// First member added to the group.
    pub representative: String,
    /// Number of members, duplicates included.
    pub size: usize,
}

impl ReportEntry {
    /// Rank order: larger groups first, equal sizes by suffix ascending.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .size
            .cmp(&self.size)
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

/// Rank groups and pick each group's representative.
///
/// Groups without members cannot be produced by [`crate::group`] and are
/// skipped when a caller builds the map by hand.
#[must_use]
pub fn rank(groups: &SuffixGroups) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = groups
        .iter()
        .filter_map(|(suffix, members)| {
            members.first().map(|first| ReportEntry {
                suffix: suffix.clone(),
                representative: first.clone(),
                size: members.len(),
            })
        })
        .collect();

    entries.sort_by(ReportEntry::rank_cmp);
    entries
}
