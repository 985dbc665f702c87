//! # Session Events
//!
//! Everything the resolution session and the selection loop tell the user
//! goes through a [`Reporter`] as an [`Event`]. Wording and styling live in
//! the reporter, so the state machine never branches on language or color.

use crate::source::FetchError;

/// A user-visible occurrence during branch resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  /// The branch list is about to be requested
  FetchingBranches,
  /// The branch list came back empty or could not be fetched
  NoBranches,
  /// Listing branches failed
  BranchFetchFailed(FetchError),
  /// Fetching repository metadata failed; the default will be derived locally
  RepositoryInfoFailed(FetchError),
  /// Header above a page listing (1-based page number)
  PageHeader { page: usize, total_pages: usize },
  /// One numbered line of a page listing
  PageEntry { label: usize, name: String, is_default: bool },
  /// The input prompt, showing the branch chosen on empty input
  Prompt { default_branch: String },
  /// `n` was entered on the last page
  AlreadyLastPage,
  /// `p` was entered on the first page
  AlreadyFirstPage,
  /// A number that does not match any label on the current page
  InvalidBranchNumber,
  /// Input that is neither a number nor a navigation command
  InvalidInput,
}

/// Sink for session events
pub trait Reporter {
  fn report(&self, event: &Event);
}

impl<R: Reporter + ?Sized> Reporter for &R {
  fn report(&self, event: &Event) {
    (**self).report(event);
  }
}
