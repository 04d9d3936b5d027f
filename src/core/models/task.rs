use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Column status sent to `PUT /tasks/{id}/move`. The server owns the list of
/// valid values, so anything a column carries is passed through; `Other`
/// holds values the client does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Other(raw) => raw,
        }
    }

    /// Statuses the server accepts.
    pub fn known() -> [TaskStatus; 3] {
        [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "todo" => TaskStatus::Todo,
            "in_progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            other => TaskStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TaskStatus::from(raw.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoveTaskRequest {
    pub status: TaskStatus,
}

/// Only `success` matters; the server may add fields at will.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct MoveTaskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_column_attribute_values() {
        assert_eq!(TaskStatus::from("todo"), TaskStatus::Todo);
        assert_eq!(TaskStatus::from("in_progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from(" done "), TaskStatus::Done);
        assert_eq!(TaskStatus::from("archived"), TaskStatus::Other("archived".into()));
        assert!(!TaskStatus::from("archived").is_known());
    }

    #[test]
    fn move_request_body_matches_endpoint_contract() {
        let body = serde_json::to_value(MoveTaskRequest {
            status: TaskStatus::InProgress,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "in_progress" }));
    }

    #[test]
    fn unknown_status_is_sent_verbatim() {
        let body = serde_json::to_value(MoveTaskRequest {
            status: TaskStatus::from("archived"),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "archived" }));
    }

    #[test]
    fn response_without_success_flag_counts_as_failure() {
        let resp: MoveTaskResponse =
            serde_json::from_str(r#"{"error": "Invalid status"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("Invalid status"));
    }

    #[test]
    fn response_ignores_extra_fields() {
        let resp: MoveTaskResponse =
            serde_json::from_str(r#"{"success": true, "id": "42", "updated": 1}"#).unwrap();
        assert!(resp.success);
    }
}
