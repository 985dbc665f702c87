//! Constants for the bough-gh client

use std::time::Duration;

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("bough/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Timeout applied to every GitHub API request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
