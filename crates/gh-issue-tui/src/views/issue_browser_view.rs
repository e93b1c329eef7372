//! Issue browser screen
//!
//! Repository header, filter row, one page of issues and pagination controls.

use crate::state::AppState;
use gh_client::IssueFilter;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let browser = &state.issue_browser;

    // Loading placeholder until the initial fan-out/join completes
    if browser.loading {
        let loading = Paragraph::new(format!("Loading {} …", browser.repo_name))
            .style(state.theme.hint())
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(state.theme.panel_border()));
        f.render_widget(loading, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Repository header
            Constraint::Length(1), // Filter row
            Constraint::Min(0),    // Issue list
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Hints / error line
        ])
        .split(area);

    render_header(state, chunks[0], f);
    render_filters(state, chunks[1], f);
    render_issues(state, chunks[2], f);
    render_pagination(state, chunks[3], f);
    render_footer(state, chunks[4], f);
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let browser = &state.issue_browser;

    let (description, owner) = match &browser.repository {
        Some(repo) => (
            repo.description.clone().unwrap_or_default(),
            repo.owner_login.clone(),
        ),
        None => (String::new(), String::new()),
    };

    let text = Text::from(vec![
        Line::from(Span::styled(
            description,
            Style::default().fg(theme.text_primary),
        )),
        Line::from(Span::styled(format!("owner: {}", owner), theme.hint())),
    ]);

    let header = Paragraph::new(text).block(
        Block::bordered()
            .title(format!(" {} ", browser.repo_name))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(theme.panel_border()),
    );
    f.render_widget(header, area);
}

fn render_filters(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let titles: Vec<Line> = IssueFilter::ALL
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::from(format!("[{}] {}", i + 1, filter.as_str())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.issue_browser.filter_index)
        .style(theme.hint())
        .highlight_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_issues(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let browser = &state.issue_browser;

    if browser.issues.is_empty() {
        let empty = Paragraph::new("No issues on this page")
            .style(theme.hint())
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(theme.panel_border()));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = browser
        .issues
        .iter()
        .map(|issue| {
            let mut title_spans = vec![
                Span::styled(format!("#{} ", issue.number), theme.hint()),
                Span::styled(
                    issue.title.clone(),
                    Style::default()
                        .fg(theme.text_primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            for label in &issue.labels {
                title_spans.push(Span::raw(" "));
                title_spans.push(Span::styled(
                    format!("[{}]", label.name),
                    Style::default().fg(theme.label_fg),
                ));
            }

            let meta = Line::from(Span::styled(
                format!(
                    "    opened by {} on {}",
                    issue.author_login,
                    issue.created_at.format("%Y-%m-%d")
                ),
                theme.hint(),
            ));

            ListItem::new(Text::from(vec![Line::from(title_spans), meta]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().border_style(theme.panel_border()))
        .highlight_style(theme.selection());

    let mut list_state = ListState::default();
    list_state.select(Some(browser.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_pagination(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let browser = &state.issue_browser;

    // "prev" renders disabled at page 1; the middleware consumes the action
    // there as well, so this is presentation matching behavior
    let prev_style = if browser.page <= 1 {
        Style::default().fg(theme.text_muted).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(theme.accent_primary)
    };

    let mut spans = vec![
        Span::styled(" ‹ prev ", prev_style),
        Span::styled(
            format!(" page {} ", browser.page),
            Style::default().fg(theme.text_primary),
        ),
        Span::styled(" next › ", Style::default().fg(theme.accent_primary)),
    ];
    if browser.refreshing {
        spans.push(Span::styled("  fetching…", Style::default().fg(theme.status_busy)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let line = if let Some(error) = &state.issue_browser.error {
        Line::from(Span::styled(format!(" {}", error), theme.error()))
    } else {
        Line::from(Span::styled(
            " 1/2/3 filter · n/p page · j/k move · o open · Esc back · q quit",
            theme.hint(),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
