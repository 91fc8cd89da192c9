use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, View};

/// Goto mode: typing a free-form identifier for the detail view. No
/// validation against the list; the detail view echoes whatever was
/// typed and looks it up on render.
pub(super) fn handle_goto(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.goto_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let id = app.goto_input.trim().to_string();
            app.goto_input.clear();
            app.mode = Mode::Navigate;
            if !id.is_empty() {
                app.view = View::Detail { id };
            }
        }
        KeyCode::Backspace => {
            app.goto_input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.goto_input.push(c);
        }
        _ => {}
    }
}
