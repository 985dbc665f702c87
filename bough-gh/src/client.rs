//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling request
//! building, timeouts and response parsing for the GitHub REST API.

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::consts::{ACCEPT, API_BASE_URL, REQUEST_TIMEOUT, USER_AGENT};
use crate::error::GitHubError;

/// Settings for constructing a [`GitHubClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
  /// API root, e.g. `https://api.github.com` or a GitHub Enterprise `/api/v3` URL
  pub base_url: String,
  /// Per-request timeout
  pub timeout: Duration,
  pub user_agent: String,
}

impl Default for ClientOptions {
  fn default() -> Self {
    Self {
      base_url: API_BASE_URL.to_string(),
      timeout: REQUEST_TIMEOUT,
      user_agent: USER_AGENT.to_string(),
    }
  }
}

/// Represents a GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
}

impl GitHubClient {
  /// Create a new GitHub client
  pub fn new(options: ClientOptions) -> Result<Self, GitHubError> {
    let client = Client::builder()
      .timeout(options.timeout)
      .user_agent(options.user_agent)
      .build()?;

    Ok(Self {
      client,
      base_url: options.base_url.trim_end_matches('/').to_string(),
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// GET `url` and decode a 200 response body as `T`.
  ///
  /// Any other status becomes [`GitHubError::Status`], carrying GitHub's
  /// `message` field when the error body has one.
  pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
    trace!("GitHub API URL: {}", url);

    let response = self.client.get(url).header(header::ACCEPT, ACCEPT).send().await?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    // First get the response body as text
    let body = response.text().await?;

    if status != StatusCode::OK {
      let message = error_message(&body);
      warn!("Unexpected GitHub API error: HTTP {} - {}", status, message.as_deref().unwrap_or(""));
      return Err(GitHubError::Status {
        status: status.as_u16(),
        message,
      });
    }

    // Then try to parse it as JSON
    Ok(serde_json::from_str::<T>(&body)?)
  }
}

/// Extract GitHub's `message` field from an error body, if present
fn error_message(body: &str) -> Option<String> {
  let error_json = serde_json::from_str::<serde_json::Value>(body).ok()?;
  error_json.get("message").and_then(|m| m.as_str()).map(str::to_string)
}

/// Create a GitHub client for the public API with default settings
pub fn create_github_client() -> Result<GitHubClient, GitHubError> {
  GitHubClient::new(ClientOptions::default())
}
