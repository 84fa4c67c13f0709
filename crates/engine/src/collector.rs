use crate::cache::MetadataCache;
use crate::error::{EngineError, Result};
use crate::pattern::ClassPattern;
use crate::resource::{MetadataReader, Resource, ResourceResolver};
use rayon::prelude::*;
use std::path::PathBuf;

/// Names gathered by one collection pass.
#[derive(Debug, Default)]
pub struct RunResult {
    /// One entry per resolved resource, in resolution order. Unreadable
    /// resources contribute an empty placeholder.
    pub names: Vec<String>,
    /// Failures that were skipped, keyed by resource path or pattern.
    pub errors: Vec<(PathBuf, EngineError)>,
}

/// Resolves patterns into resources and reads a type name from each.
pub struct Collector<R, M> {
    resolver: R,
    reader: M,
    patterns: Vec<ClassPattern>,
    pool: rayon::ThreadPool,
    strict: bool,
}

impl<R, M> Collector<R, M>
where
    R: ResourceResolver,
    M: MetadataReader,
{
    /// # Errors
    /// Returns an error if the read pool cannot be created.
    pub fn new(
        resolver: R,
        reader: M,
        patterns: Vec<ClassPattern>,
        threads: usize,
        strict: bool,
    ) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("name-census-read-{i}"))
            .build()?;

        Ok(Self {
            resolver,
            reader,
            patterns,
            pool,
            strict,
        })
    }

    /// Run one collection pass.
    ///
    /// Reads run on the pool; results are put back in resolution order, so
    /// the output does not depend on which worker finishes first.
    ///
    /// # Errors
    /// In strict mode the first failure (in resolution order) is returned,
    /// including a failed read remembered by `cache` from an earlier pass.
    /// Otherwise failures are logged, recorded in [`RunResult::errors`] and
    /// the run continues.
    pub fn collect(&self, cache: &mut MetadataCache) -> Result<RunResult> {
        let mut errors = Vec::new();
        let mut handles = Vec::new();

        for pattern in &self.patterns {
            match self.resolver.resolve(pattern) {
                Ok(found) => handles.extend(found),
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    log::warn!("cannot resolve pattern {}: {e}", pattern.expression());
                    errors.push((PathBuf::from(pattern.expression()), e));
                }
            }
        }

        let pending = cache.pending(&handles);
        log::debug!(
            "{} resources resolved, {} to read, {} cached",
            handles.len(),
            pending.len(),
            cache.len()
        );

        let reader = &self.reader;
        let outcomes: Vec<(Resource, Result<String>)> = self.pool.install(|| {
            pending
                .par_iter()
                .map(|resource| ((*resource).clone(), reader.class_name(resource)))
                .collect()
        });

        for (resource, outcome) in outcomes {
            match outcome {
                Ok(name) => cache.insert(resource, Some(name)),
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    log::warn!("{e}");
                    errors.push((resource.path().to_path_buf(), e));
                    cache.insert(resource, None);
                }
            }
        }

        // Failures recorded by an earlier pass over the same cache.
        if self.strict {
            if let Some(resource) = handles.iter().find(|r| cache.failed(r)) {
                return Err(EngineError::CachedFailure(resource.path().to_path_buf()));
            }
        }

        let names = handles
            .iter()
            .map(|resource| cache.name(resource).unwrap_or_default().to_string())
            .collect();

        Ok(RunResult { names, errors })
    }
}
