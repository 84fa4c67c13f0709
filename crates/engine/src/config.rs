use crate::options::OutputFormat;
use crate::pattern::ClassPattern;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Classpath entries (directories or single class files).
    #[builder(default = "vec![PathBuf::from(\".\")]")]
    pub roots: Vec<PathBuf>,
    #[builder(default = "vec![ClassPattern::default()]")]
    pub patterns: Vec<ClassPattern>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
    /// Read names from a list instead of walking the classpath.
    #[builder(default)]
    pub names_from: Option<PathBuf>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            patterns: vec![ClassPattern::default()],
            threads: 1,
            hidden: false,
            git_ignore: false,
            max_depth: None,
            follow_links: false,
            names_from: None,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub scan: ScanOptions,

    #[builder(default = "OutputFormat::Plain")]
    pub format: OutputFormat,
    #[builder(default)]
    pub top_n: Option<usize>,

    /// Abort on the first unreadable resource instead of skipping it.
    #[builder(default)]
    pub strict: bool,
}
