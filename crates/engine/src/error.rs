use name_census_core::classfile::ClassFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed class file '{path}': {source}")]
    ClassFile {
        path: PathBuf,
        #[source]
        source: ClassFileError,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("Earlier read of '{}' failed", .0.display())]
    CachedFailure(PathBuf),

    #[error("Classpath root does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
