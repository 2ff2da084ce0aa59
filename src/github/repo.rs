// src/github/repo.rs
// =============================================================================
// Parses the repository argument given on the command line.
//
// Supported formats:
//   - owner/repo
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo/tree/main/src   (anything after repo is ignored)
// =============================================================================

use std::fmt;

use crate::error::AppError;

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSpec {
    pub owner: String,
    pub repo: String,
}

impl RepoSpec {
    // Accepts "owner/repo" or a github.com URL
    //
    // Example:
    //   "https://github.com/rust-lang/rust" -> RepoSpec { owner: "rust-lang", repo: "rust" }
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let input = input.trim();

        let stripped = input
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.");

        let (owner, repo) = if let Some(path) = stripped.strip_prefix("github.com/") {
            // URL form: drop ?query and #fragment, take the first two segments
            let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
            let mut parts = path.split('/');
            match (parts.next(), parts.next()) {
                (Some(owner), Some(repo)) => (owner, repo.trim_end_matches(".git")),
                _ => return Err(invalid(input)),
            }
        } else {
            // Short form: exactly "owner/repo"
            let parts: Vec<&str> = input.split('/').collect();
            if parts.len() != 2 {
                return Err(invalid(input));
            }
            (parts[0], parts[1])
        };

        if owner.is_empty() || repo.is_empty() {
            return Err(invalid(input));
        }

        Ok(RepoSpec {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    // Browser URL of the repository, used in the Markdown header
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn invalid(input: &str) -> AppError {
    AppError::InvalidInput(format!(
        "'{}' is not a repository; use the owner/repo format, e.g. rust-lang/rust",
        input
    ))
}
