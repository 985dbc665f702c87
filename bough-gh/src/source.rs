//! # Blocking Branch Source
//!
//! Drives the async [`GitHubClient`] on a private single-threaded runtime so
//! the resolution session can stay synchronous.

use std::io;

use bough_core::{BranchRef, BranchSource, FetchError, RepositoryCoordinates};
use tokio::runtime::{Builder, Runtime};

use crate::client::GitHubClient;

/// [`BranchSource`] backed by the GitHub REST API
#[derive(Debug)]
pub struct GitHubBranchSource {
  runtime: Runtime,
  client: GitHubClient,
}

impl GitHubBranchSource {
  /// Wrap `client`, creating the runtime that will drive its requests.
  ///
  /// Must not be called from within an async context.
  pub fn new(client: GitHubClient) -> io::Result<Self> {
    let runtime = Builder::new_current_thread().enable_all().build()?;
    Ok(Self { runtime, client })
  }
}

impl BranchSource for GitHubBranchSource {
  fn fetch_branches(&self, coords: &RepositoryCoordinates) -> Result<Vec<BranchRef>, FetchError> {
    let branches = self
      .runtime
      .block_on(self.client.list_branches(&coords.owner, &coords.repo))?;
    Ok(branches.into_iter().map(BranchRef::from).collect())
  }

  fn fetch_default_branch_name(&self, coords: &RepositoryCoordinates) -> Result<String, FetchError> {
    self
      .runtime
      .block_on(self.client.get_default_branch_name(&coords.owner, &coords.repo))
      .map_err(FetchError::from)
  }
}
