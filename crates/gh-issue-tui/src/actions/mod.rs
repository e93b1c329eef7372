//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `Global`: application-wide actions (raw keys, quit, back navigation)
//! - `RepoList`: repository list screen actions
//! - `IssueBrowser`: issue browser screen actions

pub mod global;
pub mod issue_browser;
pub mod repo_list;

pub use global::GlobalAction;
pub use issue_browser::IssueBrowserAction;
pub use repo_list::RepoListAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Repository list screen actions
    RepoList(RepoListAction),
    /// Issue browser screen actions
    IssueBrowser(IssueBrowserAction),
}
