//! Inklude - load a directory of modules into a tree, or merge them into one config

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{aggregate_tree, deep_merge};
pub use error::{BoxError, Error, Result};
pub use loader::{JsonLoader, ModuleLoader};
pub use output::{OutputConfig, TreeFormatter, print_json, print_value};
pub use tree::{Inklude, LoadConfig, ModuleNode, ModuleTree, NamePattern};
