use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Insert mode: single-line editing of the new-todo field.
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Back to navigate; the buffer is kept for later
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            // Blank input is a silent no-op; the field is cleared only
            // when a todo was actually added
            if todo_ops::add(&mut app.todos, &mut app.ids, &app.input).is_some() {
                app.input.clear();
                app.input_cursor = 0;
                app.persist();
                app.clamp_cursor();
            }
        }

        KeyCode::Backspace => {
            if let Some(start) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(start..app.input_cursor);
                app.input_cursor = start;
            }
        }
        KeyCode::Delete => {
            if let Some(end) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.drain(app.input_cursor..end);
            }
        }

        KeyCode::Left if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = unicode::word_boundary_left(&app.input, app.input_cursor);
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = unicode::word_boundary_right(&app.input, app.input_cursor);
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.drain(..app.input_cursor);
            app.input_cursor = 0;
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}
