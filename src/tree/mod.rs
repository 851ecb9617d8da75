//! Directory traversal and module loading
//!
//! - `config` - `LoadConfig`, one per traversal call
//! - `pattern` - filter and exclude patterns applied to entry names
//! - `entry` - directory listing and file/directory classification
//! - `module_tree` - the `ModuleTree` result type
//! - `walker` - `Inklude`, the recursive parallel loader

mod config;
mod entry;
mod module_tree;
mod pattern;
mod walker;

// Re-export public types
pub use config::LoadConfig;
pub use entry::{EntryKind, classify, list_entries};
pub use module_tree::{ModuleNode, ModuleTree};
pub use pattern::{DEFAULT_EXCLUDE, DEFAULT_FILTER, NamePattern};
pub use walker::Inklude;
