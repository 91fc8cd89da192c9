use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{config_io, paths, store};
use crate::model::{Config, Todo, TodoId};
use crate::ops::todo_ops::{self, IdGen};

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The todo list
    List,
    /// Detail for one identifier. The id is free-form (as typed or as
    /// selected) and is echoed verbatim whether or not it resolves.
    Detail { id: String },
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the new-todo field
    Insert,
    /// Typing an identifier to open in the detail view
    Goto,
}

/// Main application state
pub struct App {
    pub data_dir: PathBuf,
    pub todos: Vec<Todo>,
    pub ids: IdGen,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Show key hints in the status row
    pub show_key_hints: bool,
    /// Completed-only filter (off = full list)
    pub show_completed: bool,
    /// Cursor index into the visible list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// New-todo input buffer
    pub input: String,
    /// Byte offset of the cursor in the input buffer
    pub input_cursor: usize,
    /// Identifier prompt buffer (Goto mode)
    pub goto_input: String,
}

impl App {
    pub fn new(data_dir: PathBuf, todos: Vec<Todo>, config: &Config) -> Self {
        let ids = IdGen::seeded(&todos);
        let theme = Theme::from_config(&config.ui);

        App {
            data_dir,
            todos,
            ids,
            view: View::List,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            show_key_hints: config.ui.show_key_hints,
            show_completed: false,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            input: String::new(),
            input_cursor: 0,
            goto_input: String::new(),
        }
    }

    /// The todos currently visible under the filter
    pub fn visible(&self) -> Vec<&Todo> {
        todo_ops::visible(&self.todos, self.show_completed)
    }

    /// Id of the todo under the cursor, if any
    pub fn selected_id(&self) -> Option<TodoId> {
        self.visible().get(self.cursor).map(|t| t.id)
    }

    /// Keep cursor and scroll within the visible list after a mutation
    /// or filter change
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }
        if self.cursor >= len {
            self.cursor = len - 1;
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
    }

    /// Mirror the list to the store. Runs after every mutation. Write
    /// failures are ignored; last write wins.
    pub fn persist(&self) {
        let _ = store::save_todos(&self.data_dir, &self.todos);
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let ui_state = match read_ui_state(&app.data_dir) {
        Some(s) => s,
        None => return,
    };

    app.show_completed = ui_state.show_completed;
    app.cursor = ui_state.cursor;
    app.scroll_offset = ui_state.scroll_offset;
    app.clamp_cursor();

    if ui_state.view == "detail" && !ui_state.detail_id.is_empty() {
        app.view = View::Detail {
            id: ui_state.detail_id,
        };
    }
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{UiState, write_ui_state};

    let (view_str, detail_id) = match &app.view {
        View::List => ("list".to_string(), String::new()),
        View::Detail { id } => ("detail".to_string(), id.clone()),
    };

    let ui_state = UiState {
        view: view_str,
        detail_id,
        show_completed: app.show_completed,
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
    };

    let _ = write_ui_state(&app.data_dir, &ui_state);
}

/// Run the TUI application
pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the data directory and load persisted state. The store
    // read happens exactly once, before any write can occur.
    let data_dir = paths::resolve_data_dir(data_dir_override)?;
    let config = config_io::read_config(&data_dir);
    let todos = store::load_todos(&data_dir);

    let mut app = App::new(data_dir, todos, &config);

    // Restore saved UI state
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced UI-state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
