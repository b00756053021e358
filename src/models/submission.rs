use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted quiz submission. Created once via the submit endpoint,
/// never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub school: String,
    #[serde(rename = "class")]
    #[sqlx(rename = "class")]
    pub class_name: String,
    pub language: String,
    pub answers: JsonValue,
    pub score: i64,
    pub submitted_at: DateTime<Utc>,
}

/// Normalized draft produced by the validator; `id` and `submitted_at`
/// are assigned by the store at insert.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub school: String,
    pub class_name: String,
    pub language: String,
    pub answers: JsonValue,
    pub score: i64,
}
