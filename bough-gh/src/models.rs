//! GitHub REST response shapes. Unknown fields are ignored so new fields on
//! the API side never break decoding.

use bough_core::BranchRef;
use serde::Deserialize;

/// Entry of `GET /repos/{owner}/{repo}/branches`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitHubBranch {
  pub name: String,
  #[serde(default)]
  pub commit: Option<GitHubCommitRef>,
}

/// Head commit of a branch
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitHubCommitRef {
  #[serde(default)]
  pub sha: Option<String>,
  #[serde(default)]
  pub url: Option<String>,
}

/// The subset of `GET /repos/{owner}/{repo}` bough needs
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GitHubRepository {
  pub default_branch: String,
}

impl From<GitHubBranch> for BranchRef {
  fn from(branch: GitHubBranch) -> Self {
    BranchRef {
      name: branch.name,
      commit_sha: branch.commit.and_then(|commit| commit.sha),
    }
  }
}
