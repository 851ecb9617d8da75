//! Error types for loading and aggregating module trees

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by a [`ModuleLoader`](crate::ModuleLoader).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by a traversal or aggregation call.
///
/// Only [`Error::List`] is ever suppressed (when the config is optional).
/// Every other kind terminates the whole call.
#[derive(Error, Debug)]
pub enum Error {
    /// The root path is missing or empty. Reported before any I/O.
    #[error("invalid root path: {0}")]
    Config(String),

    /// A filter, exclude, or ignore pattern failed to compile
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// A directory could not be listed
    #[error("cannot list directory '{}': {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry could not be classified as file or directory
    #[error("cannot stat '{}': {source}", .path.display())]
    Classify {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module loader rejected a file
    #[error("failed to load module '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// A directory symlink points back at one of its own ancestors
    #[error("symlink cycle at '{}'", .path.display())]
    Cycle { path: PathBuf },

    /// A top-level module is not a plain object and cannot be aggregated
    #[error("module '{name}' must be an object, found {kind}")]
    AggregateType { name: String, kind: &'static str },

    /// The accumulator passed to aggregate is not an object
    #[error("accumulator must be an object, found {kind}")]
    AccumulatorType { kind: &'static str },
}

/// Result type for inklude operations
pub type Result<T> = std::result::Result<T, Error>;
