use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::submission::Submission;

/// Raw submit payload as sent by the quiz client. Everything is optional
/// at the wire level; the validator decides what is required under the
/// active profile. `score` and `completion_time` accept either a JSON
/// number or a numeric string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub school: Option<String>,
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub language: Option<String>,
    pub answers: Option<JsonValue>,
    pub score: Option<JsonValue>,
    pub completion_time: Option<JsonValue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub user_id: Uuid,
    pub data: SubmissionSummary,
}

impl SubmitResponse {
    pub fn created(record: &Submission) -> Self {
        Self {
            success: true,
            message: "Submission saved".to_string(),
            user_id: record.id,
            data: SubmissionSummary {
                name: record.name.clone(),
                score: record.score,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<Submission>,
}

impl ListResponse {
    pub fn new(users: Vec<Submission>) -> Self {
        Self {
            success: true,
            count: users.len(),
            users,
        }
    }
}
