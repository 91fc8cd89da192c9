use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            // Left: active filter indicator. Right: key hints, dimmed.
            let mut spans: Vec<Span> = Vec::new();
            if app.show_completed {
                spans.push(Span::styled(
                    " completed only",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ));
            }
            let hint = if !app.show_key_hints {
                ""
            } else if matches!(app.view, View::Detail { .. }) {
                "Esc back  ? help "
            } else {
                "i add  space toggle  d delete  c clear  f filter  o open id  ? help "
            };
            pad_with_hint(&mut spans, hint, width, app);
            Line::from(spans)
        }
        Mode::Insert => {
            let mut spans: Vec<Span> = Vec::new();
            let hint = if app.show_key_hints {
                "Enter add  Esc done "
            } else {
                ""
            };
            pad_with_hint(&mut spans, hint, width, app);
            Line::from(spans)
        }
        Mode::Goto => {
            // Identifier prompt: id: <input>▌
            let mut spans = vec![
                Span::styled(
                    format!(" id: {}", app.goto_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            pad_with_hint(&mut spans, "Enter open  Esc cancel ", width, app);
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align a dimmed hint after whatever is already in `spans`
fn pad_with_hint(spans: &mut Vec<Span<'_>>, hint: &'static str, width: usize, app: &App) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
    }
    if !hint.is_empty() {
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
