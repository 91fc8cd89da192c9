use chrono::Utc;

use crate::model::todo::{Todo, TodoId};

/// Issues todo ids. Ids are the creation time in milliseconds, except
/// that consecutive calls within one millisecond (or a clock step
/// backwards) bump past the last issued id, so ids are strictly
/// increasing for the lifetime of the list.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: TodoId,
}

impl IdGen {
    /// Seed from an existing list so reloaded lists never re-issue an id.
    pub fn seeded(todos: &[Todo]) -> Self {
        IdGen {
            last: todos.iter().map(|t| t.id).max().unwrap_or(0),
        }
    }

    pub fn next(&mut self) -> TodoId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = now.max(self.last + 1);
        self.last
    }
}

// ---------------------------------------------------------------------------
// List mutations
// ---------------------------------------------------------------------------
//
// Every operation is total: blank titles and unknown ids degrade to
// no-ops, never errors. Callers persist after any call that reports a
// change.

/// Add a todo with the trimmed title, appended to the end of the list.
/// Returns the assigned id, or None if the title is blank after trimming.
pub fn add(todos: &mut Vec<Todo>, ids: &mut IdGen, text: &str) -> Option<TodoId> {
    let title = text.trim();
    if title.is_empty() {
        return None;
    }
    let id = ids.next();
    todos.push(Todo::new(id, title.to_string()));
    Some(id)
}

/// Flip the completed flag of the todo with the given id.
/// Returns false if no todo matches.
pub fn toggle(todos: &mut [Todo], id: TodoId) -> bool {
    match todos.iter_mut().find(|t| t.id == id) {
        Some(todo) => {
            todo.completed = !todo.completed;
            true
        }
        None => false,
    }
}

/// Remove the todo with the given id, keeping the order of the rest.
/// Returns false if no todo matches.
pub fn delete(todos: &mut Vec<Todo>, id: TodoId) -> bool {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    todos.len() != before
}

/// Remove every completed todo. Returns how many were removed.
pub fn clear_completed(todos: &mut Vec<Todo>) -> usize {
    let before = todos.len();
    todos.retain(|t| !t.completed);
    before - todos.len()
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Derived view of the list: completed todos only when `show_completed`
/// is set, the whole list otherwise. Never mutates.
pub fn visible(todos: &[Todo], show_completed: bool) -> Vec<&Todo> {
    todos
        .iter()
        .filter(|t| !show_completed || t.completed)
        .collect()
}

pub fn find(todos: &[Todo], id: TodoId) -> Option<&Todo> {
    todos.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(titles: &[&str]) -> (Vec<Todo>, IdGen) {
        let mut todos = Vec::new();
        let mut ids = IdGen::default();
        for title in titles {
            add(&mut todos, &mut ids, title).unwrap();
        }
        (todos, ids)
    }

    #[test]
    fn add_appends_trimmed_incomplete() {
        let mut todos = Vec::new();
        let mut ids = IdGen::default();
        let id = add(&mut todos, &mut ids, "  Buy milk  ").unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, id);
        assert_eq!(todos[0].title, "Buy milk");
        assert!(!todos[0].completed);
    }

    #[test]
    fn add_blank_is_a_no_op() {
        let mut todos = Vec::new();
        let mut ids = IdGen::default();
        assert_eq!(add(&mut todos, &mut ids, ""), None);
        assert_eq!(add(&mut todos, &mut ids, "   "), None);
        assert_eq!(add(&mut todos, &mut ids, "\t\n"), None);
        assert!(todos.is_empty());
    }

    #[test]
    fn ids_strictly_increase_under_rapid_adds() {
        let mut todos = Vec::new();
        let mut ids = IdGen::default();
        for i in 0..100 {
            add(&mut todos, &mut ids, &format!("task {}", i));
        }
        for pair in todos.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn seeded_generator_moves_past_loaded_ids() {
        let todos = vec![
            Todo::new(u64::MAX - 10, "far future".into()),
            Todo::new(5, "ancient".into()),
        ];
        let mut ids = IdGen::seeded(&todos);
        assert_eq!(ids.next(), u64::MAX - 9);
    }

    #[test]
    fn toggle_is_an_involution() {
        let (mut todos, _) = list(&["A"]);
        let id = todos[0].id;
        assert!(toggle(&mut todos, id));
        assert!(todos[0].completed);
        assert!(toggle(&mut todos, id));
        assert!(!todos[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let (mut todos, _) = list(&["A"]);
        let snapshot = todos.clone();
        assert!(!toggle(&mut todos, 0));
        assert_eq!(todos, snapshot);
    }

    #[test]
    fn delete_removes_in_place() {
        let (mut todos, _) = list(&["A", "B"]);
        let a = todos[0].id;
        assert!(delete(&mut todos, a));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "B");
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let (mut todos, _) = list(&["A"]);
        assert!(!delete(&mut todos, 0));
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn clear_completed_is_idempotent_and_order_preserving() {
        let (mut todos, _) = list(&["A", "B", "C", "D"]);
        let b = todos[1].id;
        let d = todos[3].id;
        toggle(&mut todos, b);
        toggle(&mut todos, d);

        assert_eq!(clear_completed(&mut todos), 2);
        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);

        assert_eq!(clear_completed(&mut todos), 0);
        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn visible_filtered_is_a_completed_subset() {
        let (mut todos, _) = list(&["A", "B", "C"]);
        let b = todos[1].id;
        toggle(&mut todos, b);

        let all = visible(&todos, false);
        let completed = visible(&todos, true);
        assert_eq!(all.len(), 3);
        assert_eq!(completed.len(), 1);
        for todo in &completed {
            assert!(todo.completed);
            assert!(all.iter().any(|t| t.id == todo.id));
        }
    }

    #[test]
    fn milk_scenario() {
        let mut todos = Vec::new();
        let mut ids = IdGen::default();
        let id = add(&mut todos, &mut ids, "Buy milk").unwrap();
        assert_eq!(todos[0].title, "Buy milk");
        assert!(!todos[0].completed);

        toggle(&mut todos, id);
        assert!(todos[0].completed);

        clear_completed(&mut todos);
        assert!(todos.is_empty());
    }

    #[test]
    fn find_by_id() {
        let (todos, _) = list(&["A", "B"]);
        assert_eq!(find(&todos, todos[1].id).unwrap().title, "B");
        assert!(find(&todos, 0).is_none());
    }
}
