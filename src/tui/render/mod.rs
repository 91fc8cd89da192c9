pub mod detail_view;
pub mod help_overlay;
pub mod input_row;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, View};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | input row | content | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Length(1), // input row (the add-task form)
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);

    // Render content area (clone view to avoid borrow conflict)
    let view = app.view.clone();
    match &view {
        View::List => list_view::render_list_view(frame, app, chunks[2]),
        View::Detail { id } => detail_view::render_detail_view(frame, app, id, chunks[2]),
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    // Status row
    status_row::render_status_row(frame, app, chunks[3]);
}

/// App name on the left, open/done counts on the right, separator below
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let open = app.todos.iter().filter(|t| !t.completed).count();
    let done = app.todos.len() - open;

    let mut spans = vec![Span::styled(
        " tally",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let counts = format!("{} open \u{00B7} {} done ", open, done);
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let counts_width = counts.chars().count();
    if content_width + counts_width < width {
        let padding = width - content_width - counts_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
