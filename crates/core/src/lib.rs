#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Naming-convention census over fully qualified type names.
//!
//! The pipeline is `filter` → `group` (which classifies every name with
//! [`suffix::suffix`]) → `rank`. Everything here is pure; discovering the
//! names is the engine's job.

extern crate alloc;

pub mod classfile;
pub mod filter;
pub mod group;
pub mod report;
pub mod suffix;

use alloc::string::String;
use alloc::vec::Vec;

pub use filter::{filter, is_conventional};
pub use group::{SuffixGroups, group};
pub use report::{ReportEntry, rank};
pub use suffix::suffix;

/// Result of one census run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Census {
    /// Names handed to the pipeline, placeholders included.
    pub scanned: usize,
    /// Names that survived filtering.
    pub kept: usize,
    /// Ranked groups, largest first.
    pub entries: Vec<ReportEntry>,
}

/// Run the whole pipeline over a batch of raw names.
///
/// This is the core entry point for the library.
#[must_use]
pub fn census(names: Vec<String>) -> Census {
    let scanned = names.len();
    let kept_names = filter(names);
    let kept = kept_names.len();
    let groups = group(kept_names);

    Census {
        scanned,
        kept,
        entries: rank(&groups),
    }
}
