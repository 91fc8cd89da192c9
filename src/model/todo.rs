use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Identifier for a todo. Milliseconds since the Unix epoch at creation,
/// bumped past the previous id when two creations share a millisecond.
pub type TodoId = u64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// Title text. Trimmed and non-empty at creation; immutable after.
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: String) -> Self {
        Todo {
            id,
            title,
            completed: false,
        }
    }

    /// The creation instant encoded in the id, in local time.
    /// None if the id doesn't map to a representable timestamp.
    pub fn added_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.id as i64).single()
    }
}
