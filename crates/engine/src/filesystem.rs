use crate::config::ScanOptions;
use crate::error::{EngineError, Result};
use crate::path_security::{ClasspathRoot, RootPolicy, validate_root};
use crate::pattern::ClassPattern;
use crate::resource::{MetadataReader, Resource, ResourceResolver};
use ignore::WalkBuilder;
use name_census_core::classfile::parse_class_name;
use std::path::Path;

/// Resolves patterns against directory classpath entries.
///
/// Every root is walked on its own, children sorted by file name, so the
/// same tree always yields the same resource order.
#[derive(Debug, Clone)]
pub struct ClasspathResolver {
    roots: Vec<ClasspathRoot>,
    hidden: bool,
    git_ignore: bool,
    follow_links: bool,
    max_depth: Option<usize>,
    strict: bool,
}

impl ClasspathResolver {
    /// Validate the configured roots.
    ///
    /// # Errors
    /// Returns an error if any root fails validation.
    pub fn new(options: &ScanOptions, strict: bool) -> Result<Self> {
        let policy = RootPolicy {
            allow_symlinks: options.follow_links,
            ..RootPolicy::default()
        };
        let roots = options
            .roots
            .iter()
            .map(|root| validate_root(root, &policy))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            roots,
            hidden: options.hidden,
            git_ignore: options.git_ignore,
            follow_links: options.follow_links,
            max_depth: options.max_depth,
            strict,
        })
    }

    fn walker(&self, root: &Path) -> ignore::Walk {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(!self.hidden)
            .git_ignore(self.git_ignore)
            .git_global(self.git_ignore)
            .git_exclude(self.git_ignore)
            .ignore(self.git_ignore)
            .parents(self.git_ignore)
            .follow_links(self.follow_links)
            .max_depth(self.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.build()
    }
}

impl ResourceResolver for ClasspathResolver {
    fn resolve(&self, pattern: &ClassPattern) -> Result<Vec<Resource>> {
        let matcher = pattern.matcher()?;
        let mut resources = Vec::new();

        for root in &self.roots {
            if root.is_file {
                if let Some(name) = root.path.file_name()
                    && matcher.is_match(Path::new(name))
                {
                    resources.push(Resource::new(&root.path));
                }
                continue;
            }

            for entry in self.walker(&root.path) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) if self.strict => return Err(EngineError::Walk(e)),
                    Err(e) => {
                        log::warn!("skipping unreadable entry under {}: {e}", root.path.display());
                        continue;
                    }
                };
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                if let Ok(relative) = entry.path().strip_prefix(&root.path)
                    && matcher.is_match(relative)
                {
                    resources.push(Resource::new(entry.path()));
                }
            }
        }

        log::debug!(
            "pattern {} matched {} resources",
            pattern.expression(),
            resources.len()
        );
        Ok(resources)
    }
}

/// Reads `this_class` out of compiled class files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassFileReader;

impl MetadataReader for ClassFileReader {
    fn class_name(&self, resource: &Resource) -> Result<String> {
        let path = resource.path();
        let bytes = std::fs::read(path).map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        parse_class_name(&bytes).map_err(|source| EngineError::ClassFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
