//! Inklude - loads a directory of modules into a ModuleTree

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::loader::{JsonLoader, ModuleLoader};

use super::config::LoadConfig;
use super::entry::{EntryKind, classify, list_entries};
use super::module_tree::{ModuleNode, ModuleTree};

/// Directory loader. Walks a directory, hands matching files to its
/// [`ModuleLoader`], and recurses into subdirectories.
///
/// Entries at each level are processed in parallel and joined before the
/// level returns, so every call returns exactly once: either the complete
/// tree or the first error any entry produced.
pub struct Inklude<L = JsonLoader> {
    loader: L,
}

impl Inklude<JsonLoader> {
    /// Loader for directories of JSON files.
    pub fn json() -> Self {
        Self::new(JsonLoader)
    }
}

impl Default for Inklude<JsonLoader> {
    fn default() -> Self {
        Self::json()
    }
}

impl<L: ModuleLoader> Inklude<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load every module under `config.root`.
    pub fn load(&self, config: &LoadConfig) -> Result<ModuleTree> {
        config.validate()?;
        debug!(
            root = %config.root.display(),
            filter = %config.filter,
            exclude = %config.exclude,
            optional = config.optional,
            "loading modules"
        );
        self.in_pool(config.jobs, || self.load_dir(config, &config.root, &[]))
    }

    /// Strict mode: an unlistable directory is an error unless the config
    /// itself says otherwise.
    pub fn required(&self, config: &LoadConfig) -> Result<ModuleTree> {
        self.load(config)
    }

    /// Like [`load`](Self::load), but an unlistable directory yields an empty tree.
    pub fn optional(&self, config: &LoadConfig) -> Result<ModuleTree> {
        let config = config.clone().with_optional(true);
        self.load(&config)
    }

    /// Run `op` on a dedicated pool when a worker count is requested.
    pub(crate) fn in_pool<T, F>(&self, jobs: usize, op: F) -> T
    where
        T: Send,
        F: FnOnce() -> T + Send,
    {
        if jobs == 0 {
            return op();
        }
        match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool.install(op),
            Err(e) => {
                // Fall back to rayon's global pool
                warn!(jobs, error = %e, "cannot build thread pool");
                op()
            }
        }
    }

    fn load_dir(
        &self,
        config: &LoadConfig,
        dir: &Path,
        ancestors: &[PathBuf],
    ) -> Result<ModuleTree> {
        let names = match list_entries(dir) {
            Ok(names) => names,
            Err(e) if config.optional => {
                debug!(dir = %dir.display(), error = %e, "optional directory not listable");
                return Ok(ModuleTree::new());
            }
            Err(source) => {
                return Err(Error::List {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };

        let canonical = fs::canonicalize(dir).map_err(|source| Error::Classify {
            path: dir.to_path_buf(),
            source,
        })?;
        if ancestors.contains(&canonical) {
            return Err(Error::Cycle {
                path: dir.to_path_buf(),
            });
        }
        let mut chain = ancestors.to_vec();
        chain.push(canonical);

        let loaded = names
            .par_iter()
            .filter_map(|name| {
                // Module keys are strings; a name that is not valid UTF-8 can't be one
                let utf8 = name.to_str();
                if utf8.is_none() {
                    trace!(dir = %dir.display(), name = ?name, "skipping non-UTF-8 name");
                }
                utf8
            })
            .filter(|name| {
                let excluded = config.is_excluded(name);
                if excluded {
                    trace!(dir = %dir.display(), name = %name, "excluded");
                }
                !excluded
            })
            .map(|name| self.load_entry(config, dir, name, &chain))
            .collect::<Result<Vec<_>>>()?;

        let mut tree = ModuleTree::new();
        for (name, node) in loaded.into_iter().flatten() {
            if tree.insert(name.clone(), node).is_some() {
                warn!(
                    dir = %dir.display(),
                    module = %name,
                    "module name collision, keeping the later entry"
                );
            }
        }
        debug!(dir = %dir.display(), modules = tree.len(), "directory loaded");
        Ok(tree)
    }

    fn load_entry(
        &self,
        config: &LoadConfig,
        dir: &Path,
        name: &str,
        ancestors: &[PathBuf],
    ) -> Result<Option<(String, ModuleNode)>> {
        let path = dir.join(name);

        match classify(&path)? {
            EntryKind::Dir => {
                let subtree = self.load_dir(config, &path, ancestors)?;
                Ok(Some((name.to_string(), ModuleNode::Dir(subtree))))
            }
            EntryKind::File => {
                let Some(module_name) = config.filter.capture(name) else {
                    trace!(path = %path.display(), "no filter match");
                    return Ok(None);
                };
                let value = self.loader.load(&path).map_err(|source| Error::Load {
                    path: path.clone(),
                    source,
                })?;
                trace!(path = %path.display(), module = module_name, "loaded");
                Ok(Some((module_name.to_string(), ModuleNode::Module(value))))
            }
        }
    }
}
