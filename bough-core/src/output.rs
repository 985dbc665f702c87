//! # Output Formatting
//!
//! Colored, emoji-prefixed console output and the [`ConsoleReporter`] that
//! renders session events for an interactive terminal.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use owo_colors::{OwoColorize, Stream, Style};
use tracing::debug;

use crate::events::{Event, Reporter};
use crate::messages::{Language, render};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode as the process-wide color override
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Leave terminal detection to owo-colors
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Apply a style only when stdout supports color (honors [`ColorMode`])
fn paint(text: &str, style: Style) -> String {
  text.if_supports_color(Stream::Stdout, |t| t.style(style)).to_string()
}

fn info_line(message: &str) -> String {
  let info = get_emoji_or_default("information", "ℹ");
  format!("{} {}", paint(&info, Style::new().blue().bold()), message)
}

fn warning_line(message: &str) -> String {
  let warning = get_emoji_or_default("warning", "⚠");
  format!("{} {}", paint(&warning, Style::new().yellow().bold()), message)
}

fn error_line(message: &str) -> String {
  let cross = get_emoji_or_default("cross_mark", "✗");
  format!("{} {}", paint(&cross, Style::new().red().bold()), message)
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
  eprintln!("{}", error_line(message));
}

/// Renders session events as styled, localized terminal output
pub struct ConsoleReporter<W: Write = Stdout> {
  language: Language,
  out: RefCell<W>,
}

impl ConsoleReporter<Stdout> {
  /// Reporter writing to the process's standard output
  pub fn stdout(language: Language) -> Self {
    Self::with_writer(language, io::stdout())
  }
}

impl<W: Write> ConsoleReporter<W> {
  pub fn with_writer(language: Language, out: W) -> Self {
    Self {
      language,
      out: RefCell::new(out),
    }
  }

  /// Consume the reporter and hand back the writer
  pub fn into_inner(self) -> W {
    self.out.into_inner()
  }

  fn format(&self, event: &Event) -> String {
    let text = render(self.language, event);
    match event {
      Event::FetchingBranches => info_line(&text),
      Event::BranchFetchFailed(_) | Event::RepositoryInfoFailed(_) => warning_line(&text),
      Event::AlreadyLastPage | Event::AlreadyFirstPage => warning_line(&text),
      Event::NoBranches | Event::InvalidBranchNumber | Event::InvalidInput => error_line(&text),
      Event::PageHeader { .. } => format!("\n{}", paint(&text, Style::new().blue().bold())),
      Event::PageEntry { is_default: true, .. } => paint(&text, Style::new().green()),
      Event::Prompt { .. } => paint(&text, Style::new().cyan().bold()),
      Event::PageEntry { .. } => text,
    }
  }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
  fn report(&self, event: &Event) {
    let line = self.format(event);
    let mut out = self.out.borrow_mut();

    // The prompt stays on the line the user types on
    let result = match event {
      Event::Prompt { .. } => write!(out, "{line}").and_then(|()| out.flush()),
      _ => writeln!(out, "{line}"),
    };

    if let Err(e) = result {
      debug!("Failed to write console output: {e}");
    }
  }
}

impl<W: Write> std::fmt::Debug for ConsoleReporter<W> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ConsoleReporter").field("language", &self.language).finish()
  }
}
