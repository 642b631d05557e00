//! Field-filtered view of a tree, shared by the structured formats

use std::borrow::Cow;

use serde::Serialize;

use crate::tree::{Node, NodeType};

use super::config::{FieldSet, NodeField};

/// A node with excluded fields removed.
///
/// Zero sizes, empty child lists and `is_hidden = false` are omitted the same
/// way `Node` omits them. Excluding `children` drops the whole subtree.
#[derive(Debug, Serialize)]
pub struct Projection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Lossy UTF-8, like `name`.
    pub path: Option<Cow<'a, str>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<NodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Projection<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

impl<'a> Projection<'a> {
    pub fn new(node: &'a Node, excluded: FieldSet) -> Self {
        let keep = |field: NodeField| !excluded.has(field);

        let children = if keep(NodeField::Children) && !node.children.is_empty() {
            Some(
                node.children
                    .iter()
                    .map(|child| Projection::new(child, excluded))
                    .collect(),
            )
        } else {
            None
        };

        Self {
            name: keep(NodeField::Name).then_some(node.name.as_str()),
            path: keep(NodeField::Path)
                .then_some(&node.path)
                .map(|path| path.to_string_lossy()),
            node_type: keep(NodeField::Type).then_some(node.node_type),
            size: (keep(NodeField::Size) && node.size > 0).then_some(node.size),
            children,
            is_hidden: (keep(NodeField::IsHidden) && node.is_hidden).then_some(true),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.path.is_none()
            && self.node_type.is_none()
            && self.size.is_none()
            && self.children.is_none()
            && self.is_hidden.is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sample() -> Node {
        Node {
            name: "root".to_string(),
            path: PathBuf::from("/root"),
            node_type: NodeType::Directory,
            size: 0,
            children: vec![Node {
                name: ".file.txt".to_string(),
                path: PathBuf::from("/root/.file.txt"),
                node_type: NodeType::File,
                size: 100,
                children: Vec::new(),
                is_hidden: true,
            }],
            is_hidden: false,
        }
    }

    #[test]
    fn test_no_exclusions_keeps_everything() {
        let node = sample();
        let projected = Projection::new(&node, FieldSet::empty());
        assert_eq!(projected.name, Some("root"));
        assert_eq!(projected.node_type, Some(NodeType::Directory));
        assert_eq!(projected.size, None, "zero size is omitted");
        let child = &projected.children.as_ref().unwrap()[0];
        assert_eq!(child.size, Some(100));
        assert_eq!(child.is_hidden, Some(true));
        assert_eq!(child.path.as_deref(), Some("/root/.file.txt"));
    }

    #[test]
    fn test_exclusions_apply_recursively() {
        let node = sample();
        let excluded: FieldSet = [NodeField::Size, NodeField::Path, NodeField::IsHidden]
            .into_iter()
            .collect();
        let projected = Projection::new(&node, excluded);
        assert!(projected.path.is_none());
        let child = &projected.children.as_ref().unwrap()[0];
        assert_eq!(child.name, Some(".file.txt"));
        assert!(child.size.is_none());
        assert!(child.path.is_none());
        assert!(child.is_hidden.is_none());
    }

    #[test]
    fn test_excluding_children_prunes_subtree() {
        let node = sample();
        let projected = Projection::new(&node, FieldSet::CHILDREN);
        assert!(projected.children.is_none());
        assert_eq!(projected.name, Some("root"));
    }

    #[test]
    fn test_excluding_everything_is_empty() {
        let node = sample();
        assert!(Projection::new(&node, FieldSet::all()).is_empty());
        assert!(!Projection::new(&node, FieldSet::empty()).is_empty());
    }

    #[test]
    fn test_projection_serializes_like_node() {
        let node = sample();
        let projected = serde_json::to_value(Projection::new(&node, FieldSet::empty())).unwrap();
        let direct = serde_json::to_value(&node).unwrap();
        assert_eq!(projected, direct);
    }
}
