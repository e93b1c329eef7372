//! Issue browser screen actions
//!
//! Every fetch result carries the sequence number of the request that
//! produced it. The reducer only applies a result whose sequence matches the
//! most recent request, so a slow response can never overwrite a newer one.

use gh_client::{Issue, Repository};

/// Actions for the issue browser screen
#[derive(Debug, Clone)]
pub enum IssueBrowserAction {
    /// Enter the screen for the given "owner/repo" name
    Open(String),
    /// A fetch was started with this sequence number
    FetchStarted(u64),
    /// Initial fan-out/join completed: repository detail plus first issue page
    Loaded {
        seq: u64,
        repository: Box<Repository>,
        issues: Vec<Issue>,
    },
    /// Initial load failed
    LoadError(u64, String),
    /// Select a filter by index (0 = all, 1 = open, 2 = closed)
    SelectFilter(usize),
    /// Advance to the next issue page
    NextPage,
    /// Go back one issue page (never below 1)
    PreviousPage,
    /// An issue re-fetch finished; fully replaces the current issue list
    IssuesLoaded(u64, Vec<Issue>),
    /// An issue re-fetch failed
    IssuesLoadError(u64, String),
    /// Move the issue cursor down
    CursorNext,
    /// Move the issue cursor up
    CursorPrevious,
    /// Open the highlighted issue in the system browser
    OpenInBrowser,
}
