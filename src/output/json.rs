//! JSON output formatting

use std::io;

use serde_json::Value;

use crate::tree::ModuleTree;

/// Print a module tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &ModuleTree) -> io::Result<()> {
    let json = serde_json::to_string_pretty(tree).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Print any JSON value (e.g. an aggregated config) to stdout.
pub fn print_value(value: &Value) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
