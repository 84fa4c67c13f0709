use crate::error::Result;
use crate::pattern::ClassPattern;
use std::path::{Path, PathBuf};

/// Handle to one candidate resource on the classpath.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    path: PathBuf,
}

impl Resource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Turns a pattern expression into resource handles.
pub trait ResourceResolver {
    /// Resources matching `pattern`, in a deterministic order.
    ///
    /// # Errors
    /// Returns an error if the pattern cannot be resolved at all.
    fn resolve(&self, pattern: &ClassPattern) -> Result<Vec<Resource>>;
}

/// Reads the fully qualified type name a resource defines.
pub trait MetadataReader: Sync {
    /// # Errors
    /// Returns an error if the resource cannot be read or decoded.
    fn class_name(&self, resource: &Resource) -> Result<String>;
}
