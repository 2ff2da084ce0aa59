// src/github/mod.rs
// =============================================================================
// This module talks to GitHub.
//
// Submodules:
// - repo: parses "owner/repo" (or a github.com URL) from the command line
// - types: serde structs for the Git Trees API response
// - fetch: the Fetcher trait and its reqwest-based GitHubClient
// =============================================================================

mod fetch;
mod repo;
mod types;

pub use fetch::{Fetcher, GitHubClient, DEFAULT_TIMEOUT, GITHUB_API_BASE};
pub use repo::RepoSpec;
pub use types::{Entry, EntryKind, TreeResponse};
