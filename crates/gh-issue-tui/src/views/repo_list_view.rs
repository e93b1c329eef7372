//! Repository list screen
//!
//! Text input for adding a repository, plus the tracked repository list.

use crate::state::{AppState, InputFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // Tracked repository list
            Constraint::Length(1), // Hints / error line
        ])
        .split(area);

    render_input(state, chunks[0], f);
    render_list(state, chunks[1], f);
    render_footer(state, chunks[2], f);
}

fn render_input(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let repo_list = &state.repo_list;

    // Error styling wins over focus styling, matching the "flagged input"
    // behavior of the submission form
    let border_style = if repo_list.error.is_some() {
        theme.error()
    } else if repo_list.focus == InputFocus::Input {
        theme.focused_border()
    } else {
        theme.panel_border()
    };

    let mut spans = vec![Span::styled(
        repo_list.input.clone(),
        Style::default().fg(theme.text_primary),
    )];
    if repo_list.submitting {
        spans.push(Span::styled(
            "  validating…",
            Style::default().fg(theme.status_busy),
        ));
    } else if repo_list.input.is_empty() && repo_list.focus == InputFocus::Input {
        spans.push(Span::styled("owner/repo", theme.hint()));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .title(" Add repository ")
            .border_style(border_style),
    );
    f.render_widget(input, area);
}

fn render_list(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let repo_list = &state.repo_list;

    let border_style = if repo_list.focus == InputFocus::List {
        theme.focused_border()
    } else {
        theme.panel_border()
    };

    let items: Vec<ListItem> = repo_list
        .repositories
        .iter()
        .map(|repo| {
            ListItem::new(Line::from(Span::styled(
                repo.name.clone(),
                Style::default().fg(theme.text_primary),
            )))
        })
        .collect();

    let title = format!(" Repositories ({}) ", repo_list.repositories.len());
    let list = List::new(items)
        .block(Block::bordered().title(title).border_style(border_style))
        .highlight_style(theme.selection())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if repo_list.focus == InputFocus::List && !repo_list.repositories.is_empty() {
        list_state.select(Some(repo_list.cursor));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let line = if let Some(error) = &state.repo_list.error {
        Line::from(Span::styled(format!(" {}", error), theme.error()))
    } else {
        Line::from(Span::styled(
            " Enter add/open · Tab focus · j/k move · Ctrl-C quit",
            theme.hint(),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
