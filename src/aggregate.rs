//! Merging a directory of plain-object modules into one config object

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::loader::{ModuleLoader, value_kind};
use crate::tree::{Inklude, LoadConfig, ModuleNode, ModuleTree};

impl<L: ModuleLoader> Inklude<L> {
    /// Load `config.root` as an optional directory and deep-merge every
    /// top-level module into one object.
    ///
    /// Subdirectories merge as the object of their own modules. Any other
    /// non-object module fails the call. When `accumulator` is given it must
    /// be an object; the merged result is also merged into it.
    pub fn aggregate(
        &self,
        config: &LoadConfig,
        accumulator: Option<&mut Value>,
    ) -> Result<Map<String, Value>> {
        let tree = self.optional(config)?;
        let aggregated = aggregate_tree(&tree)?;

        match accumulator {
            Some(Value::Object(target)) => merge_maps(target, &aggregated),
            Some(other) => {
                return Err(Error::AccumulatorType {
                    kind: value_kind(other),
                });
            }
            None => {}
        }

        debug!(
            root = %config.root.display(),
            keys = aggregated.len(),
            "aggregated modules"
        );
        Ok(aggregated)
    }
}

/// Deep-merge the top level of a tree in name order.
pub fn aggregate_tree(tree: &ModuleTree) -> Result<Map<String, Value>> {
    let mut aggregated = Map::new();
    for (name, node) in tree {
        match node {
            ModuleNode::Module(Value::Object(module)) => merge_maps(&mut aggregated, module),
            ModuleNode::Dir(subtree) => merge_maps(&mut aggregated, &subtree.to_map()),
            ModuleNode::Module(other) => {
                return Err(Error::AggregateType {
                    name: name.clone(),
                    kind: value_kind(other),
                });
            }
        }
    }
    Ok(aggregated)
}

/// Merge `source` into `target`.
///
/// Objects merge key by key and arrays index by index, recursively. Any
/// other source value replaces what is in the target.
pub fn deep_merge(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => merge_maps(target, source),
        (Value::Array(target), Value::Array(source)) => {
            for (i, item) in source.iter().enumerate() {
                match target.get_mut(i) {
                    Some(slot) => deep_merge(slot, item),
                    None => target.push(item.clone()),
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}

pub fn merge_maps(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
