// crates/engine/src/path_security.rs
//! Classpath root validation.
//!
//! Roots are checked once, when the collector is built. A root that fails
//! here makes the whole run fail; everything found below a valid root is
//! handled per resource.

use crate::error::{EngineError, Result};
use std::path::{Component, Path, PathBuf};

/// Options for root validation.
#[derive(Debug, Clone)]
pub struct RootPolicy {
    /// Accept a root that is itself a symbolic link.
    pub allow_symlinks: bool,
    /// Maximum number of normal components in the root path.
    pub max_depth: usize,
}

impl Default for RootPolicy {
    fn default() -> Self {
        Self {
            allow_symlinks: false,
            max_depth: 256,
        }
    }
}

/// A root that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathRoot {
    /// Path as given; resources are reported relative to it.
    pub path: PathBuf,
    /// Whether the root is a single file rather than a directory.
    pub is_file: bool,
}

/// Validate one classpath root.
///
/// # Errors
///
/// Returns an error if the path contains NUL bytes, is deeper than the
/// policy allows, does not exist, or is a symlink while symlinks are
/// disallowed. Relative roots such as `../classes` are accepted.
pub fn validate_root(path: &Path, policy: &RootPolicy) -> Result<ClasspathRoot> {
    if !is_path_safe(path) {
        return Err(EngineError::Config(format!(
            "Potentially unsafe path: {}",
            path.display()
        )));
    }

    let depth = path
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    if depth > policy.max_depth {
        return Err(EngineError::Config(format!(
            "Path exceeds maximum depth of {} (found {depth})",
            policy.max_depth
        )));
    }

    if path.is_symlink() && !policy.allow_symlinks {
        return Err(EngineError::Config(format!(
            "Symbolic links are not allowed: {} (use --follow)",
            path.display()
        )));
    }

    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(EngineError::MissingRoot(path.to_path_buf()));
        }
        Err(source) => {
            return Err(EngineError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(ClasspathRoot {
        path: path.to_path_buf(),
        is_file: meta.is_file(),
    })
}

/// Lightweight check that needs no filesystem access.
#[must_use]
pub fn is_path_safe(path: &Path) -> bool {
    !path.to_string_lossy().contains('\0')
}
