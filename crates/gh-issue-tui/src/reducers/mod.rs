pub mod app_reducer;
pub mod issue_browser_reducer;
pub mod repo_list_reducer;

pub use app_reducer::reduce;
