use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which view is showing ("list" or "detail")
    pub view: String,
    /// Identifier shown in the detail view (free-form, as typed)
    #[serde(default)]
    pub detail_id: String,
    /// Completed-only filter flag
    #[serde(default)]
    pub show_completed: bool,
    /// Cursor index into the visible list
    #[serde(default)]
    pub cursor: usize,
    /// Scroll offset (first visible row)
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json from the data directory
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let path = data_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let state = UiState {
            view: "detail".into(),
            detail_id: "1716200000000".into(),
            show_completed: true,
            cursor: 3,
            scroll_offset: 1,
        };

        write_ui_state(dir.path(), &state).unwrap();
        let loaded = read_ui_state(dir.path()).unwrap();

        assert_eq!(loaded.view, "detail");
        assert_eq!(loaded.detail_id, "1716200000000");
        assert!(loaded.show_completed);
        assert_eq!(loaded.cursor, 3);
        assert_eq!(loaded.scroll_offset, 1);
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn read_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".state.json"), "not json {{{").unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn serde_defaults_on_minimal_object() {
        // `view` is required (no #[serde(default)]), other fields have defaults
        let state: UiState = serde_json::from_str(r#"{"view":"list"}"#).unwrap();
        assert_eq!(state.view, "list");
        assert_eq!(state.detail_id, "");
        assert!(!state.show_completed);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }
}
