// src/tree/builder.rs
// =============================================================================
// Flat-path-to-tree construction.
//
// The Trees API returns paths like:
//
//   README.md
//   src
//   src/main.rs
//   src/cli/args.rs
//
// and we need:
//
//   repo/
//   ├── README.md
//   └── src/
//       ├── main.rs
//       └── cli/
//           └── args.rs
//
// The algorithm is plain prefix-tree (trie) insertion: for every entry,
// walk from the root one segment at a time, creating missing nodes on the
// way. Intermediate segments are always directories, even when the listing
// never mentions them on their own.
//
// Building never fails and does no I/O.
// =============================================================================

use tracing::{debug, trace};

use super::node::{NodeId, Tree};
use crate::github::Entry;

// Builds a tree from a flat entry list
//
// Parameters:
//   entries: the flat listing (borrowed; nodes keep references into it)
//   root_name: name shown on the first line, usually the repo name
pub fn build<'a>(entries: &'a [Entry], root_name: &str) -> Tree<'a> {
    let mut tree = Tree::new(root_name);

    for entry in entries {
        insert_path(&mut tree, entry);
    }

    let stats = tree.stats();
    debug!(
        entries = entries.len(),
        directories = stats.directories,
        files = stats.files,
        "built directory tree"
    );
    tree
}

// Inserts one entry, creating any missing ancestors
fn insert_path<'a>(tree: &mut Tree<'a>, entry: &'a Entry) {
    // Empty segments come from "//", a leading "/" or a trailing "/"
    let segments: Vec<&str> = entry.path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        trace!(path = %entry.path, "skipping entry with empty path");
        return;
    }

    let last = segments.len() - 1;
    let mut current = NodeId::ROOT;
    let mut path = String::with_capacity(entry.path.len());

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            path.push('/');
        }
        path.push_str(segment);

        let is_last = i == last;

        current = match tree.find_child(current, segment) {
            Some(existing) => {
                // Something lives below this node, so it must be a directory
                if !is_last {
                    tree.node_mut(existing).is_directory = true;
                }
                existing
            }
            None => {
                let is_directory = !is_last || entry.is_directory();
                tree.add_child(current, segment, path.clone(), is_directory)
            }
        };

        if is_last {
            let node = tree.node_mut(current);
            // Directory status is never downgraded by a later "file" entry
            node.is_directory |= entry.is_directory();
            node.metadata = Some(entry);
        }
    }
}
