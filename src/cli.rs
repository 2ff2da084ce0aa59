// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   ghtree <owner/repo> [-b REF] [-t TOKEN] [-o FILE] [--api-url URL]
//                       [--timeout SECS] [-v...]
//
// Settings are layered: a command-line flag wins over its environment
// variable, which wins over the built-in default. clap's `env` attribute
// does the layering for us.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::github::{DEFAULT_TIMEOUT, GITHUB_API_BASE};

#[derive(Parser, Debug)]
#[command(
    name = "ghtree",
    version,
    about = "View the directory tree of a GitHub repository without cloning it",
    long_about = "ghtree fetches a repository's file listing through the GitHub Git Trees API \
                  and prints it as a directory tree, or saves it as a Markdown document.",
    after_help = "Examples:\n  ghtree rei0721/tools\n  ghtree rei0721/tools --branch develop\n  \
                  ghtree rei0721/tools -b v1.0.0\n  ghtree rei0721/tools -o tree.md"
)]
pub struct Cli {
    /// Repository as owner/repo (a github.com URL also works)
    pub repository: String,

    /// Branch, tag or commit SHA to read
    #[arg(short, long, default_value = "main")]
    pub branch: String,

    /// GitHub personal access token
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Write a Markdown document to this file instead of printing to the terminal
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GitHub API base URL (for GitHub Enterprise: https://HOST/api/v3)
    #[arg(long, env = "GHTREE_API_URL", default_value = GITHUB_API_BASE)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    // The token, if one was given and is not blank
    pub fn token(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ghtree", "rust-lang/rust"]).unwrap();
        assert_eq!(cli.repository, "rust-lang/rust");
        assert_eq!(cli.branch, "main");
        assert!(cli.output.is_none());
        assert_eq!(cli.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "ghtree", "o/r", "-b", "v1.0.0", "-t", "abc", "-o", "tree.md", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.branch, "v1.0.0");
        assert_eq!(cli.token(), Some("abc".to_string()));
        assert_eq!(cli.output, Some(PathBuf::from("tree.md")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let cli = Cli::try_parse_from(["ghtree", "o/r", "--token", "  "]).unwrap();
        assert_eq!(cli.token(), None);
    }

    #[test]
    fn test_repository_is_required() {
        assert!(Cli::try_parse_from(["ghtree"]).is_err());
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
