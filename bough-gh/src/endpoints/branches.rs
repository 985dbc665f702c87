//! # GitHub Branch Endpoints

use tracing::{info, instrument};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::GitHubBranch;

impl GitHubClient {
  /// List the branches of a repository, in the order GitHub returns them.
  ///
  /// This issues a single request and does not follow pagination links.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<GitHubBranch>, GitHubError> {
    info!("Fetching branches for {}/{}", owner, repo);

    let url = format!("{}/repos/{}/{}/branches", self.base_url, owner, repo);
    let branches: Vec<GitHubBranch> = self.get_json(&url).await?;

    info!("Received {} branches", branches.len());
    Ok(branches)
  }
}
