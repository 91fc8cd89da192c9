use std::path::{Path, PathBuf};

/// Name of the data directory holding todos.json and friends.
pub const DATA_DIR_NAME: &str = ".tally";

/// Resolve the data directory: an explicit override wins, otherwise walk
/// up from the current directory.
pub fn resolve_data_dir(override_dir: Option<&str>) -> Result<PathBuf, std::io::Error> {
    if let Some(dir) = override_dir {
        return Ok(PathBuf::from(dir));
    }
    let cwd = std::env::current_dir()?;
    Ok(discover_data_dir(&cwd))
}

/// Find the data directory by walking up from `start`, looking for an
/// existing `.tally/`. Falls back to `.tally/` under `start` (created
/// lazily on first write) when no ancestor has one.
pub fn discover_data_dir(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return candidate;
        }
        if !current.pop() {
            return start.join(DATA_DIR_NAME);
        }
    }
}
