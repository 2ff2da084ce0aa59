// src/github/types.rs
// =============================================================================
// Wire types for the GitHub Git Trees API.
//
//   GET /repos/{owner}/{repo}/git/trees/{ref}?recursive=1
//
// returns a flat list of every path in the repository:
//
//   { "sha": "...", "truncated": false,
//     "tree": [ { "path": "src/main.rs", "type": "blob", "size": 120, ... },
//               { "path": "src", "type": "tree", ... } ] }
//
// Rust concepts:
// - serde derive: map JSON fields onto structs
// - #[serde(rename)]: "type" is a Rust keyword, so the field is called kind
// - #[serde(other)]: catch-all variant for values we don't know about
// =============================================================================

use serde::{Deserialize, Serialize};

/// Full response of the Trees API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeResponse {
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub url: String,
    /// Flat list of entries, in API order
    #[serde(default)]
    pub tree: Vec<Entry>,
    /// True when GitHub capped the listing
    #[serde(default)]
    pub truncated: bool,
}

/// One path in the repository listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Slash-delimited path relative to the repo root
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Only present for blobs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default)]
    pub sha: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Entry {
    // Convenience constructor, mostly for tests and stubs
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Entry {
            path: path.into(),
            kind,
            size: None,
            sha: String::new(),
            mode: String::new(),
            url: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }
}

/// Git object type of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// "blob": a regular file or symlink
    #[serde(rename = "blob")]
    File,
    /// "tree": a directory
    #[serde(rename = "tree")]
    Directory,
    /// "commit": a submodule pointer, shown like a file
    #[serde(rename = "commit")]
    Submodule,
    #[serde(other)]
    Unknown,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_trees_response() {
        let json = r#"{
            "sha": "abc123",
            "url": "https://api.github.com/repos/o/r/git/trees/abc123",
            "tree": [
                {"path": "README.md", "mode": "100644", "type": "blob", "sha": "1", "size": 42, "url": "u1"},
                {"path": "src", "mode": "040000", "type": "tree", "sha": "2", "url": "u2"},
                {"path": "vendor/lib", "mode": "160000", "type": "commit", "sha": "3"}
            ],
            "truncated": true
        }"#;

        let resp: TreeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.sha, "abc123");
        assert!(resp.truncated);
        assert_eq!(resp.tree.len(), 3);
        assert_eq!(resp.tree[0].kind, EntryKind::File);
        assert_eq!(resp.tree[0].size, Some(42));
        assert_eq!(resp.tree[1].kind, EntryKind::Directory);
        assert_eq!(resp.tree[1].size, None);
        assert_eq!(resp.tree[2].kind, EntryKind::Submodule);
        assert!(!resp.tree[2].is_directory());
    }

    #[test]
    fn test_unknown_type_is_not_a_directory() {
        let entry: Entry = serde_json::from_str(r#"{"path": "x", "type": "tag"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::Unknown);
        assert!(!entry.is_directory());
    }

    #[test]
    fn test_truncated_defaults_to_false() {
        let resp: TreeResponse = serde_json::from_str(r#"{"sha": "s", "tree": []}"#).unwrap();
        assert!(!resp.truncated);
        assert!(resp.tree.is_empty());
    }
}
