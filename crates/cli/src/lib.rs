// crates/cli/src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use crate::config::Config;
use crate::error::Result;
use name_census_core::Census;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collect names, run the census and print it.
///
/// # Errors
/// Returns an error if collection cannot start, strict mode hits an
/// unreadable resource, or the report cannot be written.
pub fn run(config: &Config) -> Result<Census> {
    let result = name_census_engine::run(config)?;
    for (path, err) in &result.errors {
        log::debug!("skipped {}: {err}", path.display());
    }
    if !result.errors.is_empty() {
        log::info!("{} resources could not be read", result.errors.len());
    }

    let census = name_census_core::census(result.names);
    log::info!(
        "{} names scanned, {} kept, {} groups",
        census.scanned,
        census.kept,
        census.entries.len()
    );

    presentation::print_report(&census, config)?;
    Ok(census)
}
