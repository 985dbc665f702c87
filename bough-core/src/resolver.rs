//! # Default Branch Fallback
//!
//! Picks a default branch locally when the host's declared default cannot be
//! obtained.

use crate::consts::{FALLBACK_BRANCH_NAMES, UNKNOWN_BRANCH};

/// Choose a default from the fetched branches.
///
/// Priority: `main`, then `master` (both case-insensitive), then the first
/// branch in fetch order, then [`UNKNOWN_BRANCH`] for an empty list. The
/// returned name keeps the branch's original casing.
pub fn fallback_default_branch<S: AsRef<str>>(branch_names: &[S]) -> String {
  FALLBACK_BRANCH_NAMES
    .iter()
    .find_map(|preferred| {
      branch_names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| name.eq_ignore_ascii_case(preferred))
    })
    .or_else(|| branch_names.first().map(|name| name.as_ref()))
    .unwrap_or(UNKNOWN_BRANCH)
    .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::BranchRef;

  #[test]
  fn test_main_beats_master() {
    assert_eq!(fallback_default_branch(&["dev", "master", "main"]), "main");
  }

  #[test]
  fn test_master_when_no_main() {
    assert_eq!(fallback_default_branch(&["dev", "master"]), "master");
    assert_eq!(fallback_default_branch(&["beta", "master"]), "master");
  }

  #[test]
  fn test_first_branch_when_no_conventional_name() {
    assert_eq!(fallback_default_branch(&["dev"]), "dev");
    assert_eq!(fallback_default_branch(&["release", "dev", "trunk"]), "release");
  }

  #[test]
  fn test_unknown_for_empty_list() {
    let empty: [&str; 0] = [];
    assert_eq!(fallback_default_branch(&empty), UNKNOWN_BRANCH);
  }

  #[test]
  fn test_match_is_case_insensitive_and_keeps_casing() {
    assert_eq!(fallback_default_branch(&["dev", "MASTER", "Main"]), "Main");
    assert_eq!(fallback_default_branch(&["dev", "Master"]), "Master");
  }

  #[test]
  fn test_accepts_branch_refs() {
    let branches = vec![BranchRef::new("gh-pages"), BranchRef::new("master").with_commit("abc123")];
    assert_eq!(fallback_default_branch(&branches), "master");
  }
}
