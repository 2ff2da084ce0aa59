// src/tree/node.rs
// =============================================================================
// Arena-backed directory tree.
//
// All nodes live in one Vec owned by the Tree; links between them are
// NodeId indices. A child is reachable from exactly one parent, and the
// parent link is just an index, so there is no shared ownership and no
// reference cycle.
//
// Each node keeps:
// - children: ids in insertion order
// - child_index: name -> id, for O(1) "does this child exist?" checks
//
// Metadata borrows the Entry the node was created from, so a Tree<'a>
// cannot outlive the entry list it was built from.
// =============================================================================

use std::collections::HashMap;

use crate::github::Entry;

/// Index of a node inside its Tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root is always the first node
    pub const ROOT: NodeId = NodeId(0);
}

/// One path segment of the repository
#[derive(Debug, Clone)]
pub struct Node<'a> {
    pub id: NodeId,
    /// Single path segment, e.g. "main.rs"
    pub name: String,
    /// Full path from the root, e.g. "src/main.rs" ("" for the root)
    pub path: String,
    pub is_directory: bool,
    /// Entry this node was created from, if it was listed explicitly
    pub metadata: Option<&'a Entry>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    child_index: HashMap<String, NodeId>,
}

impl<'a> Node<'a> {
    fn new(id: NodeId, name: String, path: String, is_directory: bool, parent: Option<NodeId>) -> Self {
        Node {
            id,
            name,
            path,
            is_directory,
            metadata: None,
            parent,
            children: Vec::new(),
            child_index: HashMap::new(),
        }
    }

    /// Child ids in insertion order (rendering sorts its own copy)
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Counts of the nodes below the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

/// A rooted, ordered multi-way tree of path segments
#[derive(Debug, Clone)]
pub struct Tree<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Tree<'a> {
    // Creates a tree holding only a root directory
    pub fn new(root_name: impl Into<String>) -> Self {
        let root = Node::new(NodeId::ROOT, root_name.into(), String::new(), true, None);
        Tree { nodes: vec![root] }
    }

    pub fn root(&self) -> &Node<'a> {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> &Node<'a> {
        &self.nodes[id.0]
    }

    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node<'a> {
        &mut self.nodes[id.0]
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Looks up a direct child by name
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.node(parent).child_index.get(name).copied()
    }

    // Appends a new child under `parent` and registers it in the name index
    //
    // Callers check find_child first; names stay unique per parent.
    pub(super) fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        path: String,
        is_directory: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(id, name.to_string(), path, is_directory, Some(parent)));

        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        parent_node.child_index.insert(name.to_string(), id);
        id
    }

    /// Finds a node by its slash-delimited path ("" is the root)
    pub fn find(&self, path: &str) -> Option<&Node<'a>> {
        let mut current = NodeId::ROOT;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self.find_child(current, segment)?;
        }
        Some(self.node(current))
    }

    /// Iterates over every node, root first, in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Node<'a>> {
        self.nodes.iter()
    }

    pub fn stats(&self) -> TreeStats {
        self.nodes
            .iter()
            .skip(1)
            .fold(TreeStats::default(), |mut stats, node| {
                if node.is_directory {
                    stats.directories += 1;
                } else {
                    stats.files += 1;
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = Tree::new("repo");
        let root = tree.root();
        assert_eq!(root.name, "repo");
        assert_eq!(root.path, "");
        assert!(root.is_directory);
        assert!(root.parent().is_none());
        assert!(!root.has_children());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.stats(), TreeStats::default());
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let mut tree = Tree::new("repo");
        let src = tree.add_child(NodeId::ROOT, "src", "src".into(), true);
        let main = tree.add_child(src, "main.rs", "src/main.rs".into(), false);

        assert_eq!(tree.find_child(NodeId::ROOT, "src"), Some(src));
        assert_eq!(tree.find_child(src, "main.rs"), Some(main));
        assert_eq!(tree.find_child(src, "lib.rs"), None);
        assert_eq!(tree.node(main).parent(), Some(src));
        assert_eq!(tree.root().children(), &[src]);
        assert_eq!(tree.find("src/main.rs").map(|n| n.id), Some(main));
        assert_eq!(tree.find("").map(|n| n.id), Some(NodeId::ROOT));
        assert!(tree.find("src/missing").is_none());
        assert_eq!(tree.stats(), TreeStats { directories: 1, files: 1 });
    }
}
