use crate::resource::Resource;
use hashbrown::{HashMap, HashSet};

/// Per-run memo of metadata reads.
///
/// Overlapping patterns can resolve the same resource more than once; each
/// distinct resource is read a single time and failed reads are remembered
/// as failures. The cache lives as long as the value the caller owns.
#[derive(Debug, Default, Clone)]
pub struct MetadataCache {
    entries: HashMap<Resource, Option<String>>,
}

impl MetadataCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources not read yet, de-duplicated, in first-seen order.
    #[must_use]
    pub fn pending<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        let mut seen = HashSet::new();
        resources
            .iter()
            .filter(|r| !self.entries.contains_key(*r) && seen.insert(*r))
            .collect()
    }

    /// Record the outcome of a read; `None` marks a failure.
    pub fn insert(&mut self, resource: Resource, name: Option<String>) {
        self.entries.insert(resource, name);
    }

    /// The cached name, if the resource was read successfully.
    #[must_use]
    pub fn name(&self, resource: &Resource) -> Option<&str> {
        self.entries.get(resource).and_then(Option::as_deref)
    }

    /// Whether the resource was read before and the read failed.
    #[must_use]
    pub fn failed(&self, resource: &Resource) -> bool {
        matches!(self.entries.get(resource), Some(None))
    }

    #[must_use]
    pub fn contains(&self, resource: &Resource) -> bool {
        self.entries.contains_key(resource)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
