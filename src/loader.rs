//! Module loading capability
//!
//! The traversal engine never reads file contents itself. It hands every
//! matching file path to a [`ModuleLoader`] and stores whatever value comes
//! back. Any `Fn(&Path) -> Result<Value, BoxError>` closure is a loader, and
//! [`JsonLoader`] covers the common case of a directory of JSON files.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::BoxError;

/// Produces a value for a single file path.
///
/// Loaders are called concurrently from the traversal's worker threads,
/// hence the `Sync` bound.
pub trait ModuleLoader: Sync {
    fn load(&self, path: &Path) -> Result<Value, BoxError>;
}

impl<F> ModuleLoader for F
where
    F: Fn(&Path) -> Result<Value, BoxError> + Sync,
{
    fn load(&self, path: &Path) -> Result<Value, BoxError> {
        self(path)
    }
}

/// Reads a file and decodes it as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLoader;

impl ModuleLoader for JsonLoader {
    fn load(&self, path: &Path) -> Result<Value, BoxError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Short name for the JSON type of a value, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
