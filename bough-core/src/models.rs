//! # Domain Models
//!
//! Branch references produced by one fetch and the repository coordinates
//! that identify which repository a session resolves against.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static SHORTHAND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([\w.-]+)/([\w.-]+?)(?:\.git)?$").expect("Failed to compile repository shorthand regex")
});

static GITHUB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"github\.com[/:]([\w.-]+)/([\w.-]+?)(?:\.git)?(?:[/?#].*)?$").expect("Failed to compile GitHub URL regex")
});

/// A branch as reported by the repository host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
  pub name: String,
  pub commit_sha: Option<String>,
}

impl BranchRef {
  /// Create a branch reference without commit information
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      commit_sha: None,
    }
  }

  /// Attach the head commit SHA
  pub fn with_commit(mut self, sha: impl Into<String>) -> Self {
    self.commit_sha = Some(sha.into());
    self
  }
}

impl AsRef<str> for BranchRef {
  fn as_ref(&self) -> &str {
    &self.name
  }
}

/// Errors produced while parsing repository coordinates
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatesError {
  #[error("Repository must not be empty")]
  Empty,
  #[error("Could not extract owner and repo from '{0}' (expected owner/repo or a GitHub URL)")]
  Unrecognized(String),
}

/// Owner and name of the repository to resolve a branch for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryCoordinates {
  pub owner: String,
  pub repo: String,
}

impl RepositoryCoordinates {
  pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
    Self {
      owner: owner.into(),
      repo: repo.into(),
    }
  }

  /// Parse `owner/repo`, an HTTPS GitHub URL or an SSH remote
  ///
  /// Accepted forms:
  /// - `owner/repo` (optionally suffixed with `.git`)
  /// - `https://github.com/owner/repo`, with or without `.git` or extra path
  /// - `git@github.com:owner/repo.git`
  pub fn parse(input: &str) -> Result<Self, CoordinatesError> {
    let input = input.trim();
    if input.is_empty() {
      return Err(CoordinatesError::Empty);
    }

    let captures = SHORTHAND_REGEX
      .captures(input)
      .or_else(|| GITHUB_URL_REGEX.captures(input))
      .ok_or_else(|| CoordinatesError::Unrecognized(input.to_string()))?;

    match (captures.get(1), captures.get(2)) {
      (Some(owner), Some(repo)) => Ok(Self::new(owner.as_str(), repo.as_str())),
      _ => Err(CoordinatesError::Unrecognized(input.to_string())),
    }
  }
}

impl FromStr for RepositoryCoordinates {
  type Err = CoordinatesError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for RepositoryCoordinates {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.repo)
  }
}
