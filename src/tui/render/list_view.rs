use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Render the todo list (filtered view, cursor row highlighted)
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    // Snapshot display data first so scroll state can be adjusted below
    let items: Vec<(bool, String)> = app
        .visible()
        .iter()
        .map(|t| (t.completed, t.title.clone()))
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Add one!")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row in view
    let visible_height = area.height as usize;
    if visible_height > 0 {
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        }
        if app.cursor >= app.scroll_offset + visible_height {
            app.scroll_offset = app.cursor + 1 - visible_height;
        }
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, (completed, title)) in items
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let checkbox = if *completed { "[x]" } else { "[ ]" };
        let mut spans = vec![Span::styled(
            format!(" {} ", checkbox),
            Style::default()
                .fg(app.theme.checkbox_color(*completed))
                .bg(bg),
        )];

        let title_style = if *completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_bright).bg(bg)
        };

        // " [x] " prefix is 5 cells; leave one trailing cell
        let max_title = width.saturating_sub(6);
        spans.push(Span::styled(
            unicode::truncate_to_width(title, max_title),
            title_style,
        ));

        // Pad cursor line to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
