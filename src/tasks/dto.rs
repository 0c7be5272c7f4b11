use serde::{Deserialize, Serialize};
use time::Date;

/// Body for POST /tasks. Title is checked for presence in the handler;
/// description and due date are optional.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
}

/// Body for PUT /tasks/:id. Absent fields leave the stored values alone.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub completed: Option<bool>,
}

/// Response returned after task creation.
#[derive(Debug, Serialize)]
pub struct TaskCreatedResponse {
    pub message: String,
    #[serde(rename = "taskId")]
    pub task_id: i64,
}

/// Plain confirmation for update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_created_response_uses_camel_case_task_id() {
        let response = TaskCreatedResponse {
            message: "Task created".into(),
            task_id: 1,
        };
        let json = serde_json::to_string(&response).expect("serialize");
        assert!(json.contains("\"taskId\":1"));
    }

    #[test]
    fn due_date_parses_from_calendar_date() {
        let parsed: CreateTaskRequest =
            serde_json::from_str(r#"{ "title": "Buy milk", "due_date": "2026-01-15" }"#)
                .expect("deserialize");
        assert_eq!(parsed.due_date, Some(time::macros::date!(2026 - 01 - 15)));
    }

    // The owner always comes from the verified token. A user_id smuggled
    // into the body has no field to land in, so it can never reach the
    // insert or update statements.

    #[test]
    fn create_body_ignores_forged_owner() {
        let parsed: CreateTaskRequest = serde_json::from_str(
            r#"{ "title": "Buy milk", "user_id": 999, "owner": 999 }"#,
        )
        .expect("deserialize");
        assert_eq!(parsed.title.as_deref(), Some("Buy milk"));
    }

    #[test]
    fn update_body_ignores_forged_owner() {
        let parsed: UpdateTaskRequest =
            serde_json::from_str(r#"{ "completed": true, "user_id": 999 }"#)
                .expect("deserialize");
        assert_eq!(parsed.completed, Some(true));
        assert!(parsed.title.is_none());
    }
}
