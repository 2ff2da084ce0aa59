// src/error.rs
// =============================================================================
// Error types shared by the whole application.
//
// Two layers:
// - FetchError: everything that can go wrong while talking to the GitHub API
// - AppError: the application-level taxonomy (bad input, fetch failure,
//   unwritable output, cancellation)
//
// main.rs works with anyhow::Result and attaches context on top of these,
// so the original kind is always still in the error chain.
//
// Rust concepts:
// - thiserror: derive Display and Error for enums
// - #[from]: automatic conversion so the ? operator works across types
// =============================================================================

use chrono::{DateTime, Utc};
use thiserror::Error;

// Errors returned by a Fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    /// Repository or ref does not exist (HTTP 404)
    #[error("repository or ref not found (404): {body}")]
    NotFound { body: String },

    /// The API quota is exhausted (HTTP 403/429 with no remaining requests)
    #[error("GitHub API rate limit exceeded; set GITHUB_TOKEN or retry after {}", format_reset(.reset_at))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    /// The token was rejected (HTTP 401)
    #[error("authentication failed (401): check that GITHUB_TOKEN is valid")]
    Unauthorized,

    /// Any other non-success status
    #[error("API request failed ({status}): {body}")]
    Unknown { status: u16, body: String },

    /// Network failure: DNS, TLS, connection reset, timeout...
    #[error("request to GitHub API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a valid Trees API response
    #[error("could not decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API base URL could not be used
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed command-line input (e.g. not "owner/repo")
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to fetch repository tree")]
    Fetch(#[from] FetchError),

    /// The output destination could not be created or written
    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The user interrupted the run before the tree arrived
    #[error("cancelled before the repository tree was fetched")]
    Cancelled,
}

impl AppError {
    // Wraps an io::Error with a human-readable context line
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            context: context.into(),
            source,
        }
    }
}

fn format_reset(reset_at: &Option<DateTime<Utc>>) -> String {
    match reset_at {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "the quota resets".to_string(),
    }
}
