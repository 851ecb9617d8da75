//! The tree of loaded modules returned by a traversal

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use serde_json::{Map, Value};

/// A loaded file or a nested directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModuleNode {
    Module(Value),
    Dir(ModuleTree),
}

impl ModuleNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, ModuleNode::Dir(_))
    }

    pub fn as_module(&self) -> Option<&Value> {
        match self {
            ModuleNode::Module(value) => Some(value),
            ModuleNode::Dir(_) => None,
        }
    }

    pub fn as_dir(&self) -> Option<&ModuleTree> {
        match self {
            ModuleNode::Dir(tree) => Some(tree),
            ModuleNode::Module(_) => None,
        }
    }

    /// Plain JSON form: modules as-is, directories as objects.
    pub fn to_value(&self) -> Value {
        match self {
            ModuleNode::Module(value) => value.clone(),
            ModuleNode::Dir(tree) => Value::Object(tree.to_map()),
        }
    }
}

/// Mapping of module name to loaded value or nested tree, one level per directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModuleTree {
    entries: BTreeMap<String, ModuleNode>,
}

impl ModuleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning the node it replaced on a name collision.
    pub fn insert(&mut self, name: String, node: ModuleNode) -> Option<ModuleNode> {
        self.entries.insert(name, node)
    }

    pub fn get(&self, name: &str) -> Option<&ModuleNode> {
        self.entries.get(name)
    }

    /// Follow a `/`-separated path of names through nested directories.
    pub fn lookup(&self, path: &str) -> Option<&ModuleNode> {
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        let mut node = self.get(parts.next()?)?;
        for part in parts {
            node = node.as_dir()?.get(part)?;
        }
        Some(node)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ModuleNode> {
        self.entries.iter()
    }

    /// Count (directories, modules) across the whole tree.
    pub fn counts(&self) -> (usize, usize) {
        self.entries
            .values()
            .fold((0, 0), |(dirs, modules), node| match node {
                ModuleNode::Dir(tree) => {
                    let (d, m) = tree.counts();
                    (dirs + 1 + d, modules + m)
                }
                ModuleNode::Module(_) => (dirs, modules + 1),
            })
    }

    pub fn to_map(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(name, node)| (name.clone(), node.to_value()))
            .collect()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }
}

impl<'a> IntoIterator for &'a ModuleTree {
    type Item = (&'a String, &'a ModuleNode);
    type IntoIter = btree_map::Iter<'a, String, ModuleNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
