use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::todo_ops;
use crate::tui::app::{App, Mode, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Detail view: only navigation back (and help)
    if matches!(app.view, View::Detail { .. }) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => {
                app.view = View::List;
            }
            KeyCode::Char('?') => app.show_help = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // --- Cursor movement ---
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible().len();
            if len > 0 {
                app.cursor = len - 1;
            }
        }

        // --- Mutations (each one persists the whole list) ---
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                todo_ops::toggle(&mut app.todos, id);
                app.persist();
                app.clamp_cursor();
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_id() {
                todo_ops::delete(&mut app.todos, id);
                app.persist();
                app.clamp_cursor();
            }
        }
        KeyCode::Char('c') => {
            if todo_ops::clear_completed(&mut app.todos) > 0 {
                app.persist();
                app.clamp_cursor();
            }
        }

        // --- Filter (derived view, not a mutation: no persist) ---
        KeyCode::Char('f') | KeyCode::Tab => {
            app.show_completed = !app.show_completed;
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        // --- Mode changes ---
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('n') => {
            app.mode = Mode::Insert;
            app.input_cursor = app.input.len();
        }
        KeyCode::Char('o') => {
            app.goto_input.clear();
            app.mode = Mode::Goto;
        }

        // --- Detail view for the selection ---
        KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                app.view = View::Detail { id: id.to_string() };
            }
        }

        _ => {}
    }
}
