//! Repository list screen actions

/// Actions for the repository list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoListAction {
    /// Character typed into the input field
    Char(char),
    /// Backspace pressed in the input field
    Backspace,
    /// Clear the entire input field (Ctrl+U)
    ClearLine,
    /// Switch focus between the input field and the tracked list
    ToggleFocus,
    /// Move the list cursor down
    CursorNext,
    /// Move the list cursor up
    CursorPrevious,
    /// Validate the input against the API and add it to the tracked list
    Submit,
    /// Validation succeeded; payload is the canonical full name from the API
    SubmitSuccess(String),
    /// Validation failed (bad input, duplicate, not found, network)
    SubmitError(String),
}
