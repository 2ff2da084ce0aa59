// src/github/fetch.rs
// =============================================================================
// This module fetches the full file listing of a GitHub repository.
//
// Strategy:
// - One call to the Git Trees API with ?recursive=1 returns every path in
//   the repository as a flat list
// - An optional token raises the rate limit and unlocks private repos
// - Non-success responses are turned into typed FetchError values so the
//   caller can print a useful message (and the rate-limit reset time)
//
// The Fetcher trait is the seam between the network and the rest of the
// app: tests plug in a stub instead of GitHubClient.
//
// Rust concepts:
// - async_trait: async methods in traits
// - reqwest::Request: building a request separately from sending it
// - url::Url: safe construction of the endpoint path
// =============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Client, Request, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::types::TreeResponse;
use crate::error::FetchError;

/// Public GitHub API
pub const GITHUB_API_BASE: &str = "https://api.github.com";
/// Whole-request timeout used when the caller does not pick one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "ghtree-cli";
const API_VERSION: &str = "2022-11-28";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

// Anything that can produce a repository tree listing
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_tree(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<TreeResponse, FetchError>;
}

// GitHub REST API client
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: Url,
}

impl GitHubClient {
    // Creates a client
    //
    // Parameters:
    //   token: personal access token (None = anonymous, 60 requests/hour)
    //   base_url: API root, e.g. https://api.github.com or https://host/api/v3
    //   timeout: whole-request timeout
    pub fn new(token: Option<String>, base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            token: token.filter(|t| !t.is_empty()),
            base_url,
        })
    }

    // Builds {base}/repos/{owner}/{repo}/git/trees/{ref}?recursive=1
    //
    // A ref such as "feature/login" keeps its slash as a path separator,
    // which is what the Trees API expects for branch names.
    fn tree_url(&self, owner: &str, repo: &str, reference: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                FetchError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            segments
                .pop_if_empty()
                .extend(["repos", owner, repo, "git", "trees"])
                .extend(reference.split('/'));
        }
        url.query_pairs_mut().append_pair("recursive", "1");
        Ok(url)
    }

    fn build_request(&self, url: Url) -> Result<Request, FetchError> {
        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        Ok(request.build()?)
    }
}

#[async_trait]
impl Fetcher for GitHubClient {
    async fn get_tree(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> Result<TreeResponse, FetchError> {
        let url = self.tree_url(owner, repo, reference)?;
        debug!(%url, authenticated = self.token.is_some(), "requesting repository tree");

        let request = self.build_request(url)?;
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            // The body is only used for the message, so a read failure is not fatal
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(status, &headers, body));
        }

        let body = response.text().await?;
        let tree: TreeResponse = serde_json::from_str(&body)?;

        info!(
            entries = tree.tree.len(),
            truncated = tree.truncated,
            "received repository tree"
        );
        Ok(tree)
    }
}

// Turns a non-success response into a FetchError
//
// GitHub reports an exhausted quota as 403 (primary limit) or 429
// (secondary limit), in both cases with x-ratelimit-remaining: 0.
pub fn classify_error(status: StatusCode, headers: &HeaderMap, body: String) -> FetchError {
    match status {
        StatusCode::NOT_FOUND => FetchError::NotFound { body },
        StatusCode::UNAUTHORIZED => FetchError::Unauthorized,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if is_rate_limited(headers) => {
            FetchError::RateLimited {
                reset_at: rate_limit_reset(headers),
            }
        }
        _ => FetchError::Unknown {
            status: status.as_u16(),
            body,
        },
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim)
}

fn is_rate_limited(headers: &HeaderMap) -> bool {
    header_str(headers, RATE_LIMIT_REMAINING) == Some("0")
}

// x-ratelimit-reset is a Unix epoch in seconds
fn rate_limit_reset(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let epoch = header_str(headers, RATE_LIMIT_RESET)?.parse::<i64>().ok()?;
    DateTime::<Utc>::from_timestamp(epoch, 0)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why build the Request before sending it?
//    - client.execute(request) sends a prebuilt request
//    - Tests can inspect the URL and headers of the built request without
//      any network access
//
// 2. Why is the truncated flag not an error?
//    - GitHub caps very large listings (100,000 entries / 7 MB)
//    - The partial tree is still useful, so the app prints a warning and
//      renders what it got
// -----------------------------------------------------------------------------
