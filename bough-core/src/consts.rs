//! Constants shared by the resolver, the paginator and the selection loop

/// Number of branches shown on one page of the selection prompt
pub const PAGE_SIZE: usize = 9;

/// Sentinel returned when no branch could be determined
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Preferred fallback names, in priority order, when the host default is unavailable
pub const FALLBACK_BRANCH_NAMES: [&str; 2] = ["main", "master"];
