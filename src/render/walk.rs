// src/render/walk.rs
// =============================================================================
// The one depth-first traversal shared by every output style.
//
// For each level:
// 1. Sort the children: directories first, then files, each group by name
//    (byte-wise, case-sensitive, so "Zebra" < "apple")
// 2. Emit "<prefix><connector><name>" for every child
// 3. Recurse into children that have children of their own, extending the
//    prefix with "│   " (more siblings follow) or "    " (last sibling)
//
// Sorting happens here, per level, on a temporary list of ids. The tree
// itself is never reordered.
// =============================================================================

use std::cmp::Ordering;

use crate::tree::{Node, NodeId, Tree};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL_PAD: &str = "│   ";
const SPACE_PAD: &str = "    ";

// Walks the tree and hands each output line (without newline) to `emit`
//
// The first line is the root's bare name. Stops at the first error that
// `emit` returns.
pub fn walk<E, F>(tree: &Tree<'_>, mut emit: F) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    emit(tree.root().name.as_str())?;
    walk_children(tree, NodeId::ROOT, &mut String::new(), &mut emit)
}

fn walk_children<E, F>(
    tree: &Tree<'_>,
    parent: NodeId,
    prefix: &mut String,
    emit: &mut F,
) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    let children = sorted_children(tree, parent);
    let count = children.len();
    let mut line = String::new();

    for (i, child) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;

        line.clear();
        line.push_str(prefix.as_str());
        line.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        line.push_str(&child.name);
        if child.is_directory {
            line.push('/');
        }
        emit(&line)?;

        if child.has_children() {
            let depth = prefix.len();
            prefix.push_str(if is_last { SPACE_PAD } else { VERTICAL_PAD });
            walk_children(tree, child.id, prefix, emit)?;
            prefix.truncate(depth);
        }
    }

    Ok(())
}

// Children of `parent` in display order
pub fn sorted_children<'t, 'a>(tree: &'t Tree<'a>, parent: NodeId) -> Vec<&'t Node<'a>> {
    let mut children: Vec<&Node> = tree
        .node(parent)
        .children()
        .iter()
        .map(|&id| tree.node(id))
        .collect();
    children.sort_by(|a, b| display_order(a, b));
    children
}

fn display_order(a: &Node, b: &Node) -> Ordering {
    // true sorts after false, so negate to put directories first
    (!a.is_directory)
        .cmp(&!b.is_directory)
        .then_with(|| a.name.cmp(&b.name))
}
