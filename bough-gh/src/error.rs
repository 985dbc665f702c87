//! Errors returned by the GitHub client

use std::error::Error as _;

use bough_core::FetchError;
use thiserror::Error;

/// Failure of a GitHub API call
#[derive(Debug, Error)]
pub enum GitHubError {
  /// GitHub answered with a non-200 status
  #[error("HTTP {status}{}", message_suffix(.message))]
  Status { status: u16, message: Option<String> },
  /// The request could not be built, sent or read
  #[error("{}", describe_request_error(.0))]
  Request(#[from] reqwest::Error),
  /// The body was not the JSON shape we expected
  #[error("Failed to parse GitHub response: {0}")]
  Decode(#[from] serde_json::Error),
}

fn message_suffix(message: &Option<String>) -> String {
  message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default()
}

/// reqwest's top-level message rarely says what went wrong; append the causes
fn describe_request_error(err: &reqwest::Error) -> String {
  let mut description = err.to_string();
  let mut source = err.source();
  while let Some(cause) = source {
    description.push_str(": ");
    description.push_str(&cause.to_string());
    source = cause.source();
  }
  description
}

impl From<GitHubError> for FetchError {
  fn from(err: GitHubError) -> Self {
    match err {
      GitHubError::Status { status, message } => FetchError::Status { status, message },
      GitHubError::Request(_) => FetchError::Transport(err.to_string()),
      GitHubError::Decode(_) => FetchError::Decode(err.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_error_display() {
    let err = GitHubError::Status {
      status: 404,
      message: Some("Not Found".to_string()),
    };
    assert_eq!(err.to_string(), "HTTP 404 - Not Found");

    let err = GitHubError::Status {
      status: 502,
      message: None,
    };
    assert_eq!(err.to_string(), "HTTP 502");
  }

  #[test]
  fn test_status_maps_to_fetch_status() {
    let err = GitHubError::Status {
      status: 403,
      message: Some("API rate limit exceeded".to_string()),
    };
    assert_eq!(
      FetchError::from(err),
      FetchError::Status {
        status: 403,
        message: Some("API rate limit exceeded".to_string()),
      }
    );
  }

  #[test]
  fn test_decode_maps_to_fetch_decode() {
    let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let fetch = FetchError::from(GitHubError::from(json_err));
    match fetch {
      FetchError::Decode(message) => assert!(message.starts_with("Failed to parse GitHub response")),
      other => panic!("expected a decode error, got {other:?}"),
    }
  }
}
