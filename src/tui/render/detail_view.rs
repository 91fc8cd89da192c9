use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::todo_ops;
use crate::tui::app::App;

/// Render the detail view for one identifier.
///
/// The identifier is free-form and echoed verbatim. When it resolves to
/// a stored todo the view also shows the todo's data; otherwise a
/// not-found line, never an error.
pub fn render_detail_view(frame: &mut Frame, app: &App, id: &str, area: Rect) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();

    // Blank line at top for breathing room
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled(" Task ID: ", dim_style),
        Span::styled(id.to_string(), bright_style.add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::from(""));

    let todo = id
        .parse::<u64>()
        .ok()
        .and_then(|n| todo_ops::find(&app.todos, n));

    match todo {
        Some(todo) => {
            let checkbox = if todo.completed { "[x]" } else { "[ ]" };
            let title_style = if todo.completed {
                dim_style.add_modifier(Modifier::CROSSED_OUT)
            } else {
                bright_style.add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", checkbox),
                    Style::default()
                        .fg(app.theme.checkbox_color(todo.completed))
                        .bg(bg),
                ),
                Span::styled(todo.title.clone(), title_style),
            ]));
            lines.push(Line::from(""));

            let (status, status_color) = if todo.completed {
                ("done", app.theme.green)
            } else {
                ("open", app.theme.text)
            };
            lines.push(Line::from(vec![
                Span::styled(" status: ", dim_style),
                Span::styled(status, Style::default().fg(status_color).bg(bg)),
            ]));

            if let Some(added) = todo.added_at() {
                lines.push(Line::from(vec![
                    Span::styled(" added: ", dim_style),
                    Span::styled(added.format("%Y-%m-%d %H:%M").to_string(), text_style),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(" Task not found", dim_style)));
        }
    }

    if app.show_key_hints {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(" Esc back", dim_style)));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
