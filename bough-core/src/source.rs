//! # Branch Sources
//!
//! The seam between the resolution session and whatever talks to the
//! repository host. Implementations perform one request per call and report
//! failures as [`FetchError`]; the session decides how to fall back.

use thiserror::Error;

use crate::models::{BranchRef, RepositoryCoordinates};

/// Failure of a single fetch against the repository host
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
  /// The host answered with something other than 200 OK
  #[error("HTTP {status}")]
  Status { status: u16, message: Option<String> },
  /// The request never produced a response (DNS, TLS, timeout, ...)
  #[error("{0}")]
  Transport(String),
  /// The response body did not have the expected shape
  #[error("{0}")]
  Decode(String),
}

impl FetchError {
  /// The HTTP status code, when the failure carried one
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Read-only access to a repository host
pub trait BranchSource {
  /// List every branch of the repository in the host's order
  fn fetch_branches(&self, coords: &RepositoryCoordinates) -> Result<Vec<BranchRef>, FetchError>;

  /// Name of the branch the host declares as the repository default
  fn fetch_default_branch_name(&self, coords: &RepositoryCoordinates) -> Result<String, FetchError>;
}

impl<S: BranchSource + ?Sized> BranchSource for &S {
  fn fetch_branches(&self, coords: &RepositoryCoordinates) -> Result<Vec<BranchRef>, FetchError> {
    (**self).fetch_branches(coords)
  }

  fn fetch_default_branch_name(&self, coords: &RepositoryCoordinates) -> Result<String, FetchError> {
    (**self).fetch_default_branch_name(coords)
  }
}

impl<S: BranchSource + ?Sized> BranchSource for Box<S> {
  fn fetch_branches(&self, coords: &RepositoryCoordinates) -> Result<Vec<BranchRef>, FetchError> {
    (**self).fetch_branches(coords)
  }

  fn fetch_default_branch_name(&self, coords: &RepositoryCoordinates) -> Result<String, FetchError> {
    (**self).fetch_default_branch_name(coords)
  }
}
