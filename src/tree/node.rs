//! Tree node types produced by the builder

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

/// Kind of filesystem entry a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Directory,
    File,
    Symlink,
}

impl NodeType {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeType::Directory => "directory",
            NodeType::File => "file",
            NodeType::Symlink => "symlink",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filesystem entry in the result tree.
///
/// Each node owns its children; the tree is never mutated after the builder
/// returns it. Zero sizes, empty child lists and `is_hidden = false` are left
/// out of the serialized form and restored as defaults when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(serialize_with = "serialize_lossy")]
    pub path: PathBuf,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_hidden: bool,
}

impl Node {
    pub fn is_dir(&self) -> bool {
        self.node_type == NodeType::Directory
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Depth of the deepest node below `self` (0 for a leaf).
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Paths are written as lossy UTF-8 so non-UTF-8 names never fail a format.
fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn is_zero(size: &u64) -> bool {
    *size == 0
}

fn is_false(flag: &bool) -> bool {
    !*flag
}
