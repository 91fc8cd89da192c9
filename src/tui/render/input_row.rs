use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the new-todo input row (the add form, always visible)
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Insert;

    let prompt_style = if editing {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = vec![Span::styled(" > ", prompt_style)];

    if editing {
        // Buffer split at the cursor; the grapheme under the cursor is
        // shown reversed, or a bar when the cursor sits at the end
        let before = &app.input[..app.input_cursor];
        let cursor_grapheme = unicode::grapheme_at(&app.input, app.input_cursor);

        if !before.is_empty() {
            spans.push(Span::styled(before.to_string(), bright_style));
        }
        if cursor_grapheme.is_empty() {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        } else {
            spans.push(Span::styled(
                cursor_grapheme.to_string(),
                bright_style.add_modifier(Modifier::REVERSED),
            ));
            let after_start = app.input_cursor + cursor_grapheme.len();
            if after_start < app.input.len() {
                spans.push(Span::styled(
                    app.input[after_start..].to_string(),
                    bright_style,
                ));
            }
        }
    } else if app.input.is_empty() {
        spans.push(Span::styled("Enter new task...", dim_style));
    } else {
        // Half-typed entry kept after leaving insert mode
        spans.push(Span::styled(
            app.input.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn idle_shows_placeholder() {
        let app = app_with_todos(&[]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("Enter new task..."));
    }

    #[test]
    fn insert_mode_shows_buffer_and_cursor() {
        let mut app = app_with_todos(&[]);
        app.mode = Mode::Insert;
        app.input = "Buy milk".into();
        app.input_cursor = app.input.len();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("Buy milk"));
        assert!(output.contains('\u{258C}'));
    }

    #[test]
    fn kept_buffer_shows_in_navigate_mode() {
        let mut app = app_with_todos(&[]);
        app.input = "half-typed".into();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(output.contains("half-typed"));
        assert!(!output.contains('\u{258C}'));
    }
}
