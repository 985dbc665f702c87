//! # Resolution Session
//!
//! One end-to-end branch resolution: fetch the branch list, resolve the
//! default, then run the selection loop. The branch list and the default name
//! are each computed at most once per session, failures included.

use std::cell::OnceCell;
use std::io::BufRead;

use tracing::{debug, info};

use crate::consts::{PAGE_SIZE, UNKNOWN_BRANCH};
use crate::events::{Event, Reporter};
use crate::models::{BranchRef, RepositoryCoordinates};
use crate::resolver::fallback_default_branch;
use crate::selection::SelectionLoop;
use crate::source::BranchSource;

/// State for resolving one branch of one repository
pub struct ResolutionSession<S, R> {
  source: S,
  reporter: R,
  coords: RepositoryCoordinates,
  page_size: usize,
  branches: OnceCell<Vec<BranchRef>>,
  default_name: OnceCell<String>,
}

impl<S: BranchSource, R: Reporter> ResolutionSession<S, R> {
  pub fn new(source: S, reporter: R, coords: RepositoryCoordinates) -> Self {
    Self {
      source,
      reporter,
      coords,
      page_size: PAGE_SIZE,
      branches: OnceCell::new(),
      default_name: OnceCell::new(),
    }
  }

  /// Override the number of branches per page
  pub fn with_page_size(mut self, page_size: usize) -> Self {
    self.page_size = page_size.max(1);
    self
  }

  pub fn coordinates(&self) -> &RepositoryCoordinates {
    &self.coords
  }

  /// The repository's branches, fetched on first use.
  ///
  /// A failed fetch is reported and yields an empty list, which is kept for
  /// the rest of the session.
  pub fn branches(&self) -> &[BranchRef] {
    self.branches.get_or_init(|| {
      self.reporter.report(&Event::FetchingBranches);
      match self.source.fetch_branches(&self.coords) {
        Ok(branches) => {
          info!("Fetched {} branches for {}", branches.len(), self.coords);
          branches
        }
        Err(err) => {
          debug!("Failed to fetch branches for {}: {err}", self.coords);
          self.reporter.report(&Event::BranchFetchFailed(err));
          Vec::new()
        }
      }
    })
  }

  /// The host-declared default branch, or a local fallback when the host
  /// cannot be asked. Fetches the branch list if the fallback needs it.
  pub fn default_branch_name(&self) -> &str {
    self.default_name.get_or_init(|| match self.source.fetch_default_branch_name(&self.coords) {
      Ok(name) => {
        debug!("Host default branch for {} is {name}", self.coords);
        name
      }
      Err(err) => {
        debug!("Failed to fetch repository info for {}: {err}", self.coords);
        self.reporter.report(&Event::RepositoryInfoFailed(err));
        let fallback = fallback_default_branch(self.branches());
        debug!("Using fallback default branch {fallback}");
        fallback
      }
    })
  }

  /// Resolve a branch interactively, reading commands from `input`.
  ///
  /// Returns [`UNKNOWN_BRANCH`] without prompting when there is nothing to
  /// choose from.
  pub fn run<I: BufRead>(&self, input: I) -> String {
    let branches = self.branches();
    if branches.is_empty() {
      self.reporter.report(&Event::NoBranches);
      return UNKNOWN_BRANCH.to_string();
    }

    let default_name = self.default_branch_name();
    SelectionLoop::new(branches, default_name, &self.reporter)
      .with_page_size(self.page_size)
      .run(input)
  }
}

#[cfg(test)]
mod tests {
  use std::cell::{Cell, RefCell};
  use std::io::Cursor;

  use super::*;
  use crate::source::FetchError;

  struct FakeSource {
    branches: Result<Vec<BranchRef>, FetchError>,
    default_name: Result<String, FetchError>,
    branch_calls: Cell<usize>,
    default_calls: Cell<usize>,
  }

  impl FakeSource {
    fn new(names: &[&str], default_name: Result<&str, FetchError>) -> Self {
      Self {
        branches: Ok(names.iter().map(|name| BranchRef::new(*name)).collect()),
        default_name: default_name.map(str::to_string),
        branch_calls: Cell::new(0),
        default_calls: Cell::new(0),
      }
    }

    fn failing_branches(err: FetchError, default_name: Result<&str, FetchError>) -> Self {
      Self {
        branches: Err(err),
        ..Self::new(&[], default_name)
      }
    }
  }

  impl BranchSource for FakeSource {
    fn fetch_branches(&self, _coords: &RepositoryCoordinates) -> Result<Vec<BranchRef>, FetchError> {
      self.branch_calls.set(self.branch_calls.get() + 1);
      self.branches.clone()
    }

    fn fetch_default_branch_name(&self, _coords: &RepositoryCoordinates) -> Result<String, FetchError> {
      self.default_calls.set(self.default_calls.get() + 1);
      self.default_name.clone()
    }
  }

  #[derive(Default)]
  struct RecordingReporter {
    events: RefCell<Vec<Event>>,
  }

  impl Reporter for RecordingReporter {
    fn report(&self, event: &Event) {
      self.events.borrow_mut().push(event.clone());
    }
  }

  fn coords() -> RepositoryCoordinates {
    RepositoryCoordinates::new("octocat", "hello-world")
  }

  fn network_error() -> FetchError {
    FetchError::Transport("connection refused".to_string())
  }

  #[test]
  fn test_host_default_is_used() {
    let source = FakeSource::new(&["main", "dev", "feature-x"], Ok("main"));
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords());

    assert_eq!(session.run(Cursor::new("\n")), "main");
    assert_eq!(session.run(Cursor::new("2\n")), "dev");
    assert_eq!(source.branch_calls.get(), 1);
    assert_eq!(source.default_calls.get(), 1);
  }

  #[test]
  fn test_fallback_priority_when_metadata_fails() {
    let cases: [(&[&str], &str); 3] = [
      (&["dev", "master", "main"], "main"),
      (&["dev", "master"], "master"),
      (&["dev"], "dev"),
    ];

    for (names, expected) in cases {
      let source = FakeSource::new(names, Err(network_error()));
      let reporter = RecordingReporter::default();
      let session = ResolutionSession::new(&source, &reporter, coords());
      assert_eq!(session.default_branch_name(), expected);
    }
  }

  #[test]
  fn test_fallback_fetches_branches_lazily_once() {
    let source = FakeSource::new(&["beta", "master"], Err(FetchError::Status {
      status: 500,
      message: None,
    }));
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords());

    // Resolving the default first pulls in the branch list
    assert_eq!(session.default_branch_name(), "master");
    assert_eq!(source.branch_calls.get(), 1);

    assert_eq!(session.run(Cursor::new("\n")), "master");
    assert_eq!(source.branch_calls.get(), 1);
    assert_eq!(source.default_calls.get(), 1);

    let events = reporter.events.borrow();
    assert_eq!(
      events
        .iter()
        .filter(|event| matches!(event, Event::RepositoryInfoFailed(FetchError::Status { status: 500, .. })))
        .count(),
      1
    );
  }

  #[test]
  fn test_empty_branch_list_returns_unknown_without_prompt() {
    let source = FakeSource::new(&[], Ok("main"));
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords());

    assert_eq!(session.run(Cursor::new("2\n")), UNKNOWN_BRANCH);

    let events = reporter.events.borrow();
    assert!(events.contains(&Event::NoBranches));
    assert!(!events.iter().any(|event| matches!(event, Event::Prompt { .. })));
    assert_eq!(source.default_calls.get(), 0);
  }

  #[test]
  fn test_failed_branch_fetch_is_reported_and_memoized() {
    let source = FakeSource::failing_branches(
      FetchError::Status {
        status: 404,
        message: Some("Not Found".to_string()),
      },
      Ok("main"),
    );
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords());

    assert_eq!(session.run(Cursor::new("")), UNKNOWN_BRANCH);
    assert_eq!(session.run(Cursor::new("")), UNKNOWN_BRANCH);
    assert_eq!(source.branch_calls.get(), 1);

    let events = reporter.events.borrow();
    assert!(events.iter().any(|event| matches!(
      event,
      Event::BranchFetchFailed(FetchError::Status { status: 404, .. })
    )));
  }

  #[test]
  fn test_both_calls_failing_with_empty_list_gives_unknown_default() {
    let source = FakeSource::failing_branches(network_error(), Err(network_error()));
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords());

    assert_eq!(session.default_branch_name(), UNKNOWN_BRANCH);
  }

  #[test]
  fn test_host_default_missing_from_list() {
    let source = FakeSource::new(&["dev", "feature-x"], Ok("trunk"));
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords());

    // No pinned default: label 1 is the first fetched branch
    assert_eq!(session.run(Cursor::new("1\n")), "dev");
    assert_eq!(session.run(Cursor::new("\n")), "trunk");
  }

  #[test]
  fn test_custom_page_size() {
    let source = FakeSource::new(&["main", "a", "b", "c"], Ok("main"));
    let reporter = RecordingReporter::default();
    let session = ResolutionSession::new(&source, &reporter, coords()).with_page_size(2);

    // Page 2 shows b and c
    assert_eq!(session.run(Cursor::new("n\n2\n")), "c");
  }
}
