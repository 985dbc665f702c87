//! # Localized Messages
//!
//! Renders [`Event`]s as English or Chinese text. Styling (colors, emoji) is
//! applied on top of this by the console reporter.

use crate::events::Event;
use crate::source::FetchError;

/// Language used for user-facing messages
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
  /// English
  #[default]
  En,
  /// Simplified Chinese
  Zh,
}

impl Language {
  const fn pick(self, en: &'static str, zh: &'static str) -> &'static str {
    match self {
      Self::En => en,
      Self::Zh => zh,
    }
  }
}

/// Render the text for an event in the given language
pub fn render(language: Language, event: &Event) -> String {
  let lang = language;
  match event {
    Event::FetchingBranches => lang.pick("Fetching branch list...", "正在获取分支列表...").to_string(),
    Event::NoBranches => lang
      .pick(
        "Unable to fetch branch list or repository has no branches",
        "无法获取分支列表或仓库没有分支",
      )
      .to_string(),
    Event::BranchFetchFailed(err) => fetch_failure(
      err,
      lang.pick("Failed to fetch branches", "获取分支失败"),
      lang.pick("Error fetching branches", "获取分支时发生错误"),
    ),
    Event::RepositoryInfoFailed(err) => fetch_failure(
      err,
      lang.pick("Failed to fetch repository info", "获取仓库信息失败"),
      lang.pick("Error fetching default branch", "获取默认分支时发生错误"),
    ),
    Event::PageHeader { page, total_pages } => match lang {
      Language::En => format!("=== Branch List - Page {page} of {total_pages} ==="),
      Language::Zh => format!("=== 分支列表 - 第 {page} 页 (共 {total_pages} 页) ==="),
    },
    Event::PageEntry {
      label,
      name,
      is_default,
    } => {
      if *is_default {
        format!("{label}. {name} {}", lang.pick("(default)", "(默认分支)"))
      } else {
        format!("{label}. {name}")
      }
    }
    Event::Prompt { default_branch } => match lang {
      Language::En => format!(
        "Select branch number, 'n' for next page, 'p' for previous page, press Enter for default [{default_branch}]: "
      ),
      Language::Zh => {
        format!("请选择分支编号，输入 'n' 下一页，'p' 上一页，直接回车选择默认分支 [{default_branch}]: ")
      }
    },
    Event::AlreadyLastPage => lang.pick("Already on the last page", "已经是最后一页").to_string(),
    Event::AlreadyFirstPage => lang.pick("Already on the first page", "已经是第一页").to_string(),
    Event::InvalidBranchNumber => lang.pick("Invalid branch number", "无效的分支编号").to_string(),
    Event::InvalidInput => lang.pick("Invalid input", "无效输入").to_string(),
  }
}

fn fetch_failure(err: &FetchError, status_prefix: &str, error_prefix: &str) -> String {
  match err {
    FetchError::Status {
      status,
      message: Some(message),
    } => format!("{status_prefix}: HTTP {status} ({message})"),
    FetchError::Status { status, message: None } => format!("{status_prefix}: HTTP {status}"),
    FetchError::Transport(msg) | FetchError::Decode(msg) => format!("{error_prefix}: {msg}"),
  }
}
