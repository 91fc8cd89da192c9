use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
<!-- tally recovery log — append-only
     Store content that couldn't be parsed lands here instead of being
     destroyed. Safe to delete if empty or stale. -->

---
";

/// Return the path to the recovery log file.
pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("recovery.log")
}

/// Append discarded content to the recovery log. Best effort; logging
/// failures are swallowed.
pub fn log_discarded(data_dir: &Path, source: &str, reason: &str, body: &str) {
    let _ = try_log(data_dir, source, reason, body);
}

fn try_log(data_dir: &Path, source: &str, reason: &str, body: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = recovery_log_path(data_dir);
    let is_new = !path.exists();

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if is_new {
        file.write_all(FILE_HEADER.as_bytes())?;
    }

    let timestamp = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let entry = format!(
        "## {} — discarded: {}\nReason: {}\n\n```\n{}\n```\n\n---\n",
        timestamp, source, reason, body
    );
    file.write_all(entry.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn appends_entries_with_header_once() {
        let tmp = TempDir::new().unwrap();
        log_discarded(tmp.path(), "todos.json", "expected value", "garbage one");
        log_discarded(tmp.path(), "todos.json", "expected value", "garbage two");

        let log = fs::read_to_string(recovery_log_path(tmp.path())).unwrap();
        assert_eq!(log.matches("tally recovery log").count(), 1);
        assert!(log.contains("garbage one"));
        assert!(log.contains("garbage two"));
    }

    #[test]
    fn creates_data_dir_if_needed() {
        let tmp = TempDir::new().unwrap();
        let data_dir = tmp.path().join(".tally");
        log_discarded(&data_dir, "todos.json", "bad", "body");
        assert!(recovery_log_path(&data_dir).exists());
    }
}
