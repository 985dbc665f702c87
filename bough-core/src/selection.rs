//! # Selection Loop
//!
//! The interactive state machine: show the current page, read one line,
//! then change page, pick a branch, accept the default or complain and ask
//! again.

use std::io::BufRead;

use tracing::{debug, warn};

use crate::consts::PAGE_SIZE;
use crate::events::{Event, Reporter};
use crate::models::BranchRef;
use crate::paginator::{PageEntry, render_page, total_pages};

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  /// Empty line: take the default branch
  Accept,
  /// `n` / `N`
  NextPage,
  /// `p` / `P`
  PreviousPage,
  /// Any integer; only labels on the current page are valid
  Pick(i64),
  /// Everything else
  Unrecognized,
}

impl Command {
  pub fn parse(input: &str) -> Self {
    let input = input.trim();
    if input.is_empty() {
      Self::Accept
    } else if input.eq_ignore_ascii_case("n") {
      Self::NextPage
    } else if input.eq_ignore_ascii_case("p") {
      Self::PreviousPage
    } else if let Ok(number) = input.parse::<i64>() {
      Self::Pick(number)
    } else {
      Self::Unrecognized
    }
  }
}

/// Paginated branch picker over an already fetched branch list
pub struct SelectionLoop<'a, R: Reporter + ?Sized> {
  branches: &'a [BranchRef],
  default_name: &'a str,
  page_size: usize,
  current_page: usize,
  reporter: &'a R,
}

impl<'a, R: Reporter + ?Sized> SelectionLoop<'a, R> {
  pub fn new(branches: &'a [BranchRef], default_name: &'a str, reporter: &'a R) -> Self {
    Self {
      branches,
      default_name,
      page_size: PAGE_SIZE,
      current_page: 0,
      reporter,
    }
  }

  /// Override the number of entries per page (must be positive)
  pub fn with_page_size(mut self, page_size: usize) -> Self {
    self.page_size = page_size.max(1);
    self
  }

  /// 0-based index of the page currently shown
  pub fn current_page(&self) -> usize {
    self.current_page
  }

  pub fn total_pages(&self) -> usize {
    total_pages(self.branches.len(), self.page_size)
  }

  /// Entries of the current page
  pub fn page(&self) -> Vec<PageEntry<'a>> {
    render_page(self.branches, self.default_name, self.current_page, self.page_size)
  }

  /// Report the header and entries of the current page
  pub fn render(&self) {
    self.reporter.report(&Event::PageHeader {
      page: self.current_page + 1,
      total_pages: self.total_pages(),
    });

    for entry in self.page() {
      self.reporter.report(&Event::PageEntry {
        label: entry.label,
        name: entry.name.to_string(),
        is_default: entry.is_default,
      });
    }
  }

  /// Apply one command; returns the chosen branch when the loop is done
  pub fn apply(&mut self, command: Command) -> Option<String> {
    match command {
      Command::Accept => return Some(self.default_name.to_string()),
      Command::NextPage => {
        if self.current_page + 1 < self.total_pages() {
          self.current_page += 1;
          debug!(page = self.current_page, "Moved to next page");
        } else {
          self.reporter.report(&Event::AlreadyLastPage);
        }
      }
      Command::PreviousPage => {
        if self.current_page > 0 {
          self.current_page -= 1;
          debug!(page = self.current_page, "Moved to previous page");
        } else {
          self.reporter.report(&Event::AlreadyFirstPage);
        }
      }
      Command::Pick(number) => {
        let page = self.page();
        let picked = usize::try_from(number)
          .ok()
          .and_then(|label| label.checked_sub(1))
          .and_then(|index| page.get(index));

        match picked {
          Some(entry) => return Some(entry.name.to_string()),
          None => self.reporter.report(&Event::InvalidBranchNumber),
        }
      }
      Command::Unrecognized => self.reporter.report(&Event::InvalidInput),
    }
    None
  }

  /// Prompt until a branch is chosen or the input runs out.
  ///
  /// End of input (or a read error) counts as accepting the default. Bytes
  /// that are not UTF-8 are decoded lossily and land in [`Command::Unrecognized`].
  pub fn run<I: BufRead>(mut self, mut input: I) -> String {
    loop {
      self.render();
      self.reporter.report(&Event::Prompt {
        default_branch: self.default_name.to_string(),
      });

      let mut line = Vec::new();
      match input.read_until(b'\n', &mut line) {
        Ok(0) => {
          debug!("Input closed, using default branch");
          return self.default_name.to_string();
        }
        Ok(_) => {}
        Err(e) => {
          warn!("Failed to read selection input: {e}");
          return self.default_name.to_string();
        }
      }

      if let Some(branch) = self.apply(Command::parse(&String::from_utf8_lossy(&line))) {
        return branch;
      }
    }
  }
}
