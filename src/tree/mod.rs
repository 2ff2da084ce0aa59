// src/tree/mod.rs
// =============================================================================
// In-memory directory tree built from the flat API listing.
//
// Submodules:
// - node: the arena (Tree, Node, NodeId)
// - builder: flat paths -> Tree
// =============================================================================

mod builder;
mod node;

pub use builder::build;
pub use node::{Node, NodeId, Tree, TreeStats};
