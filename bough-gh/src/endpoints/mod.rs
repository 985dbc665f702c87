//! # GitHub API Endpoints
//!
//! Endpoint implementations for the GitHub API resources bough reads:
//! repository branches and repository metadata.

pub mod branches;
pub mod repos;
