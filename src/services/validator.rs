use serde_json::{json, Value as JsonValue};

use crate::dto::submission_dto::SubmitRequest;
use crate::error::{Error, Result};
use crate::models::submission::SubmissionDraft;

/// Which submission fields a deployment requires. Exactly one profile is
/// active per deployment; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// name, email, phone, school, language required
    A,
    /// name, phone, language required; email, school, class optional
    B,
}

impl Profile {
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Profile::A => &["name", "email", "phone", "school", "language"],
            Profile::B => &["name", "phone", "language"],
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Profile::A),
            "B" | "b" => Ok(Profile::B),
            other => Err(format!("unknown submission profile: {}", other)),
        }
    }
}

/// Which request field feeds the persisted numeric column. A deployment
/// records a score or an elapsed time, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Score,
    CompletionTime,
}

impl std::str::FromStr for ScoreField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "score" => Ok(ScoreField::Score),
            "completionTime" | "completion_time" => Ok(ScoreField::CompletionTime),
            other => Err(format!("unknown score field: {}", other)),
        }
    }
}

/// Validates incoming submit payloads against the active profile and
/// normalizes them into a canonical draft.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    profile: Profile,
    score_field: ScoreField,
}

impl SubmissionValidator {
    pub fn new(profile: Profile, score_field: ScoreField) -> Self {
        Self {
            profile,
            score_field,
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Every missing required field is reported, not just the first.
    pub fn validate(&self, req: &SubmitRequest) -> Result<SubmissionDraft> {
        let missing: Vec<String> = self
            .profile
            .required_fields()
            .iter()
            .filter(|&&field| {
                let value = match field {
                    "name" => &req.name,
                    "phone" => &req.phone,
                    "email" => &req.email,
                    "school" => &req.school,
                    "language" => &req.language,
                    _ => unreachable!("unknown required field"),
                };
                value.as_deref().map_or(true, |v| v.trim().is_empty())
            })
            .map(|&field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(Error::Validation(missing));
        }

        let raw_score = match self.score_field {
            ScoreField::Score => req.score.as_ref(),
            ScoreField::CompletionTime => req.completion_time.as_ref(),
        };

        Ok(SubmissionDraft {
            name: trimmed(&req.name),
            phone: trimmed(&req.phone),
            email: trimmed(&req.email).to_lowercase(),
            school: trimmed(&req.school),
            class_name: trimmed(&req.class_name),
            language: trimmed(&req.language),
            answers: req.answers.clone().unwrap_or_else(|| json!([])),
            score: coerce_numeric(raw_score),
        })
    }
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Best-effort integer coercion. Accepts JSON numbers and numeric
/// strings; anything else silently becomes 0.
fn coerce_numeric(value: Option<&JsonValue>) -> i64 {
    match value {
        Some(JsonValue::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(JsonValue::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
