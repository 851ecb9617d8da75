//! Configuration for a traversal call

use std::path::{Path, PathBuf};

use glob::Pattern;

use super::pattern::NamePattern;
use crate::error::{Error, Result};

/// Configuration for loading a directory of modules.
///
/// One config drives a whole traversal call. Nested directories are loaded
/// with the same config; only the directory path changes.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub root: PathBuf,
    /// Files whose name does not match are skipped. The capture becomes the
    /// module name.
    pub filter: NamePattern,
    /// Files and directories whose name matches are skipped entirely.
    pub exclude: NamePattern,
    /// Extra glob patterns that exclude by name, like `-I` on the command line.
    pub ignore: Vec<Pattern>,
    /// A directory that cannot be listed yields an empty tree instead of an error.
    pub optional: bool,
    /// Number of worker threads.
    /// 0 = rayon's global pool
    /// N = dedicated pool of N threads
    pub jobs: usize,
}

impl LoadConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Set the filter from a regex.
    pub fn with_filter(mut self, pattern: &str) -> Result<Self> {
        self.filter = NamePattern::regex(pattern)?;
        Ok(self)
    }

    /// Set the filter from a glob. The module name is the file stem.
    pub fn with_filter_glob(mut self, pattern: &str) -> Result<Self> {
        self.filter = NamePattern::glob(pattern)?;
        Ok(self)
    }

    /// Set the exclude pattern from a regex.
    pub fn with_exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = NamePattern::regex(pattern)?;
        Ok(self)
    }

    /// Add a glob that excludes matching names.
    pub fn with_ignore(mut self, pattern: &str) -> Result<Self> {
        let glob = Pattern::new(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.ignore.push(glob);
        Ok(self)
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reject an empty root before any filesystem access.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::Config(
                "root path must be a non-empty path".to_string(),
            ));
        }
        Ok(())
    }

    /// Check if an entry name is excluded by the exclude pattern or an ignore glob.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.is_match(name) || self.ignore.iter().any(|p| p.matches(name))
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            filter: NamePattern::default_filter(),
            exclude: NamePattern::default_exclude(),
            ignore: Vec::new(),
            optional: false,
            jobs: 0,
        }
    }
}
