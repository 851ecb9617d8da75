//! Module tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Console tree formatter, with or without colors
//! - `json` - JSON output

mod config;
mod json;
mod tree;

pub use config::OutputConfig;
pub use json::{print_json, print_value};
pub use tree::{TreeFormatter, summarize_value};
