//! # Bough Core Library
//!
//! Resolves which branch of a remote repository the user wants to work on.
//! The crate holds the network-free half of bough: default-branch fallback,
//! the pagination layout, the interactive selection loop and the session that
//! memoizes everything fetched through a [`BranchSource`].

pub mod consts;
pub mod events;
pub mod messages;
pub mod models;
pub mod output;
pub mod paginator;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod source;

pub use consts::{PAGE_SIZE, UNKNOWN_BRANCH};
pub use events::{Event, Reporter};
pub use messages::Language;
pub use models::{BranchRef, CoordinatesError, RepositoryCoordinates};
pub use output::{ColorMode, ConsoleReporter};
pub use paginator::{PageEntry, render_page, total_pages};
pub use resolver::fallback_default_branch;
pub use selection::{Command, SelectionLoop};
pub use session::ResolutionSession;
pub use source::{BranchSource, FetchError};
