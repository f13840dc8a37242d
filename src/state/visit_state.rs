/// Visit state definitions for the crawl registry
///
/// A URL enters the registry when a task claims it. It then stays there
/// either as merely discovered (claimed but not yet fetched, or never fetched
/// because the depth budget ran out) or as fetched. Failed fetches leave the
/// registry entirely, so there is no failed state.
use serde::Serialize;
use std::fmt;

/// Represents where a known URL is in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitState {
    /// URL has been claimed by a task but no page has been recorded for it
    Discovered,

    /// URL was fetched successfully and its page is recorded
    Fetched,
}

impl VisitState {
    /// Returns true if a page has been recorded for this URL
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched)
    }

    /// Converts the state to its report string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Fetched => "fetched",
        }
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
