use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::todos::repo::{Priority, Todo};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub due_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// Partial update. The outer `Option` is "was the field in the body at all";
/// for `description` and `dueDate` the inner `Option` carries an explicit
/// `null`, which clears the field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    #[serde(deserialize_with = "double_option_rfc3339")]
    pub due_date: Option<Option<OffsetDateTime>>,
    pub priority: Option<Priority>,
}

// A bare `Option<Option<T>>` collapses an explicit null into the outer
// `None`; these wrappers keep "present but null" as `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn double_option_rfc3339<'de, D>(
    deserializer: D,
) -> Result<Option<Option<OffsetDateTime>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    time::serde::rfc3339::option::deserialize(deserializer).map(Some)
}

impl UpdateTodoRequest {
    /// Mutates only the fields that were present in the body.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(description) = self.description {
            todo.description = description;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodoListResponse {
    pub success: bool,
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub success: bool,
    pub todo: Todo,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    fn sample_todo() -> Todo {
        Todo {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Buy milk".into(),
            description: Some("two liters".into()),
            completed: false,
            due_date: Some(datetime!(2026-08-10 12:00:00 UTC)),
            priority: Priority::Medium,
            created_at: datetime!(2026-08-01 09:30:00 UTC),
        }
    }

    #[test]
    fn create_request_defaults_optional_fields() {
        let payload: CreateTodoRequest = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert!(payload.description.is_none());
        assert!(payload.due_date.is_none());
        assert!(payload.priority.is_none());
        assert_eq!(payload.priority.unwrap_or_default(), Priority::Medium);
    }

    #[test]
    fn create_request_parses_priority_and_due_date() {
        let payload: CreateTodoRequest = serde_json::from_str(
            r#"{"title":"Taxes","priority":"high","dueDate":"2026-08-10T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(payload.priority, Some(Priority::High));
        assert_eq!(payload.due_date, Some(datetime!(2026-08-10 12:00:00 UTC)));
    }

    #[test]
    fn update_distinguishes_absent_from_null() {
        let absent: UpdateTodoRequest = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(absent.description.is_none());
        assert!(absent.due_date.is_none());

        let cleared: UpdateTodoRequest =
            serde_json::from_str(r#"{"description":null,"dueDate":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
        assert_eq!(cleared.due_date, Some(None));
    }

    #[test]
    fn apply_changes_only_provided_fields() {
        let mut todo = sample_todo();
        let before = todo.clone();
        let patch: UpdateTodoRequest = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        patch.apply(&mut todo);
        assert!(todo.completed);
        assert_eq!(todo.title, before.title);
        assert_eq!(todo.description, before.description);
        assert_eq!(todo.due_date, before.due_date);
        assert_eq!(todo.priority, before.priority);
    }

    #[test]
    fn apply_clears_nullable_fields_on_explicit_null() {
        let mut todo = sample_todo();
        let patch: UpdateTodoRequest =
            serde_json::from_str(r#"{"description":null,"dueDate":null}"#).unwrap();
        patch.apply(&mut todo);
        assert!(todo.description.is_none());
        assert!(todo.due_date.is_none());
    }

    #[test]
    fn apply_replaces_values() {
        let mut todo = sample_todo();
        let patch: UpdateTodoRequest = serde_json::from_str(
            r#"{"title":"Buy oat milk","priority":"low","dueDate":"2026-09-01T00:00:00Z"}"#,
        )
        .unwrap();
        patch.apply(&mut todo);
        assert_eq!(todo.title, "Buy oat milk");
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.due_date, Some(datetime!(2026-09-01 00:00:00 UTC)));
        assert!(!todo.completed);
    }

    #[test]
    fn todo_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_todo()).unwrap();
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["dueDate"], "2026-08-10T12:00:00Z");
        assert_eq!(json["createdAt"], "2026-08-01T09:30:00Z");
        assert!(json.get("userId").is_some());
        assert!(json.get("due_date").is_none());
    }

    #[test]
    fn delete_response_carries_the_envelope() {
        let json = serde_json::to_value(DeletedResponse {
            success: true,
            message: "Todo deleted successfully".into(),
        })
        .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Todo deleted successfully");
    }
}
