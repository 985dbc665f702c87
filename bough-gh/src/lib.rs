//! # GitHub API Client
//!
//! Read-only GitHub REST integration for bough: listing a repository's
//! branches and looking up its declared default branch. [`GitHubBranchSource`]
//! adapts the async client to the blocking [`bough_core::BranchSource`] seam.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod source;

// Re-export the client
pub use client::{ClientOptions, GitHubClient, create_github_client};
pub use error::GitHubError;
// Re-export models
pub use models::{GitHubBranch, GitHubCommitRef, GitHubRepository};
pub use source::GitHubBranchSource;
