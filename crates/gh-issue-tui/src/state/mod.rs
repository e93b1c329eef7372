pub mod app;
pub mod issue_browser;
pub mod repo_list;

pub use app::{AppState, Screen};
pub use issue_browser::IssueBrowserState;
pub use repo_list::{InputFocus, RepoListState};
