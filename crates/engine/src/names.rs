//! Name lists as an alternative to walking a classpath.
//!
//! One entry per line. Entries may be dotted names (`org.pkg.Foo`) or class
//! file paths as printed by `jar tf` (`org/pkg/Foo.class`); both end up as
//! dotted names. Blank lines are skipped.

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read and normalise a name list.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn read_names_from(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_names(BufReader::new(file)).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_names<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(name) = normalize_entry(&line) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Turn one list entry into a dotted type name.
#[must_use]
pub fn normalize_entry(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    let entry = entry.strip_suffix(".class").unwrap_or(entry);
    Some(entry.trim_start_matches('/').replace(['/', '\\'], "."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    #[test]
    fn normalises_class_paths() {
        assert_eq!(
            normalize_entry("org/pkg/io/Resource.class").as_deref(),
            Some("org.pkg.io.Resource")
        );
        assert_eq!(
            normalize_entry("  org.pkg.Factory  ").as_deref(),
            Some("org.pkg.Factory")
        );
        assert_eq!(normalize_entry("/a/B.class").as_deref(), Some("a.B"));
        assert_eq!(normalize_entry("   "), None);
    }

    #[test]
    fn keeps_nested_markers_for_the_filter() {
        assert_eq!(
            normalize_entry("org/pkg/Outer$Inner.class").as_deref(),
            Some("org.pkg.Outer$Inner")
        );
    }

    #[test]
    fn reads_lines_in_order() {
        let input = Cursor::new("b.Second\n\na/First.class\r\nc.Third");
        let names = read_names(input).unwrap();
        assert_eq!(names, vec!["b.Second", "a.First", "c.Third"]);
    }

    #[test]
    fn reads_from_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "x.Reader\ny.Writer\n").unwrap();
        let names = read_names_from(file.path()).unwrap();
        assert_eq!(names, vec!["x.Reader", "y.Writer"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_names_from(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }
}
