//! # Branch Pagination
//!
//! Lays branches out across fixed-size, 1-labelled pages with the default
//! branch pinned to the first entry of page 0.
//!
//! The page count is taken over the full branch list while pages after the
//! first window the list *without* the default branch, shifted back by the one
//! slot the default occupies on page 0. When the default is missing from the
//! list, the later windows therefore repeat the last entry of page 0 and can run
//! short before the page count is exhausted.

/// One numbered line of a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry<'a> {
  /// 1-based label the user types to pick this branch
  pub label: usize,
  pub name: &'a str,
  pub is_default: bool,
}

/// Number of pages needed for `branch_count` branches
pub fn total_pages(branch_count: usize, page_size: usize) -> usize {
  debug_assert!(page_size > 0, "page size must be positive");
  branch_count.div_ceil(page_size)
}

/// Entries shown on `page` (0-based)
pub fn render_page<'a, S: AsRef<str>>(
  branch_names: &'a [S],
  default_name: &str,
  page: usize,
  page_size: usize,
) -> Vec<PageEntry<'a>> {
  debug_assert!(page_size > 0, "page size must be positive");

  let default_branch = branch_names.iter().map(|name| name.as_ref()).find(|name| *name == default_name);
  let others = branch_names
    .iter()
    .map(|name| name.as_ref())
    .filter(|name| *name != default_name);

  let (pinned, window): (Option<&'a str>, Vec<&'a str>) = match (page, default_branch) {
    (0, Some(default)) => (Some(default), others.take(page_size - 1).collect()),
    (0, None) => (None, others.take(page_size).collect()),
    _ => (None, others.skip(page * page_size - 1).take(page_size).collect()),
  };

  pinned
    .into_iter()
    .map(|name| (name, true))
    .chain(window.into_iter().map(|name| (name, false)))
    .enumerate()
    .map(|(index, (name, is_default))| PageEntry {
      label: index + 1,
      name,
      is_default,
    })
    .collect()
}
