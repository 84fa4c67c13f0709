//! Namespace pattern expressions.
//!
//! A pattern such as `classpath*:org/springframework/**/*.class` selects
//! resources below every classpath root. The `classpath*:`/`classpath:`
//! prefix is accepted for familiarity and carries no extra meaning here; the
//! remainder is a glob over the root-relative path where `*` stays inside one
//! directory and `**` crosses directories.

use crate::error::{EngineError, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::str::FromStr;

pub const DEFAULT_PATTERN: &str = "**/*.class";

const PREFIXES: &[&str] = &["classpath*:", "classpath:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPattern {
    expression: String,
    glob: String,
}

impl ClassPattern {
    /// Parse and validate a pattern expression.
    ///
    /// # Errors
    /// Returns an error if nothing is left after stripping the prefix or the
    /// glob does not compile.
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        let body = PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .unwrap_or(trimmed)
            .trim_start_matches('/');

        if body.is_empty() {
            return Err(EngineError::Config(format!(
                "Empty pattern expression: {expression:?}"
            )));
        }

        let pattern = Self {
            expression: trimmed.to_string(),
            glob: body.to_string(),
        };
        pattern.matcher()?;
        Ok(pattern)
    }

    /// The expression as written by the user.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The glob matched against root-relative paths.
    #[must_use]
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Compile the glob.
    ///
    /// # Errors
    /// Returns an error if the glob is malformed.
    pub fn matcher(&self) -> Result<GlobMatcher> {
        let glob = GlobBuilder::new(&self.glob)
            .literal_separator(true)
            .build()?;
        Ok(glob.compile_matcher())
    }
}

impl Default for ClassPattern {
    fn default() -> Self {
        Self {
            expression: DEFAULT_PATTERN.to_string(),
            glob: DEFAULT_PATTERN.to_string(),
        }
    }
}

impl FromStr for ClassPattern {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn strips_classpath_prefixes() {
        let p = ClassPattern::parse("classpath*:org/springframework/**/*.class").unwrap();
        assert_eq!(p.glob(), "org/springframework/**/*.class");
        assert_eq!(p.expression(), "classpath*:org/springframework/**/*.class");

        let p = ClassPattern::parse("classpath:/com/acme/*.class").unwrap();
        assert_eq!(p.glob(), "com/acme/*.class");
    }

    #[test]
    fn single_star_stays_in_one_directory() {
        let m = ClassPattern::parse("org/*.class").unwrap().matcher().unwrap();
        assert!(m.is_match(Path::new("org/Foo.class")));
        assert!(!m.is_match(Path::new("org/sub/Foo.class")));
    }

    #[test]
    fn double_star_crosses_directories() {
        let m = ClassPattern::default().matcher().unwrap();
        assert!(m.is_match(Path::new("Foo.class")));
        assert!(m.is_match(Path::new("org/pkg/deep/Foo.class")));
        assert!(!m.is_match(Path::new("org/pkg/Foo.java")));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(ClassPattern::parse("classpath*:").is_err());
        assert!(ClassPattern::parse("   ").is_err());
    }

    #[test]
    fn malformed_glob_is_rejected() {
        let err = "org/[abc.class".parse::<ClassPattern>().unwrap_err();
        assert!(err.contains("Invalid pattern"));
    }
}
