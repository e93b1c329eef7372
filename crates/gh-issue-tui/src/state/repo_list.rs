//! Repository list screen state

use gh_issue_config::TrackedRepository;

/// Which part of the repository list screen has keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFocus {
    /// The "add repository" text input
    #[default]
    Input,
    /// The tracked repository list
    List,
}

impl InputFocus {
    pub fn toggle(self) -> Self {
        match self {
            InputFocus::Input => InputFocus::List,
            InputFocus::List => InputFocus::Input,
        }
    }
}

/// State for the repository list screen
#[derive(Debug, Clone, Default)]
pub struct RepoListState {
    /// Current text of the "add repository" input
    pub input: String,
    /// Tracked repositories, insertion order preserved
    pub repositories: Vec<TrackedRepository>,
    /// A submission is being validated against the API
    pub submitting: bool,
    /// Last submission error; cleared on the next keystroke
    pub error: Option<String>,
    /// Cursor into the tracked list
    pub cursor: usize,
    pub focus: InputFocus,
}

impl RepoListState {
    pub fn with_repositories(repositories: Vec<TrackedRepository>) -> Self {
        Self {
            repositories,
            ..Self::default()
        }
    }

    /// Whether the given name is already tracked (case-insensitive, as
    /// GitHub repository names are)
    pub fn is_tracked(&self, name: &str) -> bool {
        self.repositories
            .iter()
            .any(|r| r.name.eq_ignore_ascii_case(name))
    }
}

/// Parse user input into `(owner, repo)`
///
/// Accepts the plain `owner/repo` form as well as GitHub URLs:
/// - `https://github.com/owner/repo`
/// - `https://github.com/owner/repo.git`
/// - `git@github.com:owner/repo[.git]`
/// - `github.com/owner/repo`
pub fn parse_repo_input(input: &str) -> Option<(String, String)> {
    let input = input.trim();

    let path = input
        .strip_prefix("https://github.com/")
        .or_else(|| input.strip_prefix("http://github.com/"))
        .or_else(|| input.strip_prefix("git@github.com:"))
        .or_else(|| input.strip_prefix("github.com/"))
        .unwrap_or(input);

    let path = path.strip_suffix(".git").unwrap_or(path);

    let mut parts = path.split('/');
    let owner = parts.next()?;
    let repo = parts.next()?;

    if owner.is_empty() || repo.is_empty() || parts.next().is_some() {
        return None;
    }

    Some((owner.to_string(), repo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_owner_repo() {
        assert_eq!(
            parse_repo_input("facebook/react"),
            Some(("facebook".to_string(), "react".to_string()))
        );
    }

    #[test]
    fn test_parse_https_url() {
        assert_eq!(
            parse_repo_input("https://github.com/rust-lang/rust.git"),
            Some(("rust-lang".to_string(), "rust".to_string()))
        );
    }

    #[test]
    fn test_parse_ssh_url() {
        assert_eq!(
            parse_repo_input("git@github.com:octocat/Hello-World"),
            Some(("octocat".to_string(), "Hello-World".to_string()))
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_repo_input("  ratatui/ratatui "),
            Some(("ratatui".to_string(), "ratatui".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(parse_repo_input(""), None);
        assert_eq!(parse_repo_input("no-slash"), None);
        assert_eq!(parse_repo_input("/repo"), None);
        assert_eq!(parse_repo_input("owner/"), None);
        assert_eq!(parse_repo_input("a/b/c"), None);
    }

    #[test]
    fn test_is_tracked_ignores_case() {
        let state = RepoListState::with_repositories(vec![TrackedRepository::new(
            "Facebook/React",
        )]);
        assert!(state.is_tracked("facebook/react"));
        assert!(!state.is_tracked("facebook/jest"));
    }
}
