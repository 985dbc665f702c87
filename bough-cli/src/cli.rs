//! # Command Line Interface
//!
//! Defines the `bough` arguments and the handler that resolves one branch of
//! the given repository.

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use bough_core::{ColorMode, ConsoleReporter, Language, RepositoryCoordinates, ResolutionSession};
use bough_gh::consts::API_BASE_URL;
use bough_gh::{ClientOptions, GitHubBranchSource, GitHubClient};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use url::Url;

/// Top-level CLI command for bough
#[derive(Parser, Debug)]
#[command(name = "bough")]
#[command(display_name = "🌳 Bough")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Pick a branch of a GitHub repository interactively")]
#[command(
  long_about = "Bough lists the branches of a GitHub repository page by page and asks which one\n\
        to use. Press Enter to take the default branch, a number to pick a listed branch,\n\
        or n / p to move between pages.\n\n\
        The chosen branch name is printed on its own as the last line of output."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Repository as owner/repo or a GitHub URL
  #[arg(value_name = "REPO")]
  pub repository: RepositoryCoordinates,

  /// GitHub API root (for GitHub Enterprise use https://HOST/api/v3)
  #[arg(long, value_name = "URL", default_value = API_BASE_URL, value_parser = parse_api_url)]
  pub api_url: Url,

  /// Per-request timeout in seconds
  #[arg(long, value_name = "SECS", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
  pub timeout: u64,

  /// Language for prompts and messages
  #[arg(long, value_enum, ignore_case = true, default_value_t = Language::En)]
  pub lang: Language,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

/// Accept only absolute http(s) URLs for the API root
fn parse_api_url(value: &str) -> Result<Url, String> {
  let url = Url::parse(value).map_err(|e| format!("invalid URL: {e}"))?;
  match url.scheme() {
    "http" | "https" => Ok(url),
    other => Err(format!("unsupported scheme '{other}', expected http or https")),
  }
}

impl Cli {
  fn client_options(&self) -> ClientOptions {
    ClientOptions {
      base_url: self.api_url.as_str().to_string(),
      timeout: Duration::from_secs(self.timeout),
      ..ClientOptions::default()
    }
  }
}

/// Handle the parsed command line: resolve one branch and print it
pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();
  debug!("Resolving a branch of {} via {}", cli.repository, cli.api_url);

  let client = GitHubClient::new(cli.client_options()).context("Failed to create GitHub client")?;
  let source = GitHubBranchSource::new(client).context("Failed to start the request runtime")?;
  let reporter = ConsoleReporter::stdout(cli.lang);
  let session = ResolutionSession::new(source, reporter, cli.repository);

  let stdin = io::stdin();
  let branch = session.run(stdin.lock());
  info!("Resolved branch {branch}");

  let mut stdout = io::stdout().lock();
  // Piped input is not echoed, so the prompt line is still open
  if !stdin.is_terminal() {
    writeln!(stdout)?;
  }
  writeln!(stdout, "{branch}").context("Failed to write the selected branch")?;
  Ok(())
}
