// crates/engine/src/lib.rs
pub mod cache;
pub mod collector;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod names;
pub mod options;
pub mod path_security;
pub mod pattern;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_support;

use crate::cache::MetadataCache;
use crate::collector::Collector;
pub use crate::collector::RunResult;
use crate::config::Config;
use crate::error::Result;
use crate::filesystem::{ClassFileReader, ClasspathResolver};

/// Collect raw type names as configured.
///
/// With `names_from` set the list is read as is; otherwise every pattern is
/// resolved against the classpath roots and each resource's class file is
/// decoded.
///
/// # Errors
///
/// Returns an error when the collector cannot be set up (invalid root,
/// unreadable name list, thread pool failure) or, in strict mode, on the
/// first resource that cannot be read. Other failures are collected in
/// `RunResult::errors`.
pub fn run(config: &Config) -> Result<RunResult> {
    if let Some(list) = &config.scan.names_from {
        let names = names::read_names_from(list)?;
        log::debug!("read {} names from {}", names.len(), list.display());
        return Ok(RunResult {
            names,
            errors: Vec::new(),
        });
    }

    let resolver = ClasspathResolver::new(&config.scan, config.strict)?;
    let collector = Collector::new(
        resolver,
        ClassFileReader,
        config.scan.patterns.clone(),
        config.scan.threads,
        config.strict,
    )?;

    let mut cache = MetadataCache::new();
    collector.collect(&mut cache)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, ScanOptionsBuilder};
    use crate::test_support::{write_class, write_garbage};
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path, strict: bool) -> Config {
        let scan = ScanOptionsBuilder::default()
            .roots(vec![root.to_path_buf()])
            .threads(2usize)
            .build()
            .unwrap();
        ConfigBuilder::default()
            .scan(scan)
            .strict(strict)
            .build()
            .unwrap()
    }

    #[test]
    fn scans_class_files_below_root() {
        let temp = TempDir::new().unwrap();
        write_class(temp.path(), "org/pkg/io/DefaultResourceLoader");
        write_class(temp.path(), "org/pkg/io/Resource");
        write_class(temp.path(), "org/pkg/io/Resource$Inner");
        write_garbage(temp.path(), "org/pkg/io/Corrupt.class");

        let result = run(&config_for(temp.path(), false)).unwrap();

        assert_eq!(
            result.names,
            vec![
                "",
                "org.pkg.io.DefaultResourceLoader",
                "org.pkg.io.Resource$Inner",
                "org.pkg.io.Resource",
            ]
        );
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn strict_run_stops_on_corrupt_class() {
        let temp = TempDir::new().unwrap();
        write_class(temp.path(), "a/Fine");
        write_garbage(temp.path(), "a/Corrupt.class");

        assert!(run(&config_for(temp.path(), true)).is_err());
    }

    #[test]
    fn names_list_replaces_the_walk() {
        let temp = TempDir::new().unwrap();
        let list = temp.path().join("names.txt");
        std::fs::write(&list, "org/pkg/Foo.class\norg.pkg.Bar\n").unwrap();

        let scan = ScanOptionsBuilder::default()
            .roots(vec![temp.path().join("ignored-because-list-wins")])
            .names_from(Some(list))
            .build()
            .unwrap();
        let config = ConfigBuilder::default().scan(scan).build().unwrap();

        let result = run(&config).unwrap();
        assert_eq!(result.names, vec!["org.pkg.Foo", "org.pkg.Bar"]);
    }
}
