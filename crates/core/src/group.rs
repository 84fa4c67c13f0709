use alloc::borrow::ToOwned;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::suffix::suffix;

/// Suffix → members in the order they were first seen.
///
/// A `BTreeMap` keeps iteration independent of hashing, so everything built
/// on top of it is reproducible across runs.
pub type SuffixGroups = BTreeMap<String, Vec<String>>;

/// Partition names by suffix.
///
/// One left-to-right pass: the first name with a given suffix creates the
/// group, later ones are appended. Duplicates are kept.
#[must_use]
pub fn group<I>(names: I) -> SuffixGroups
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().fold(SuffixGroups::new(), |mut groups, name| {
        let key = suffix(&name).to_owned();
        groups.entry(key).or_default().push(name);
        groups
    })
}
