use sqlx::PgPool;

use crate::database::connection::ConnectionManager;
use crate::error::{Error, Result};
use crate::models::submission::{Submission, SubmissionDraft};

/// Persistence for quiz submissions: one insert path, one full-scan read
/// path. The store assigns `id` and `submitted_at`; nothing here updates
/// or deletes.
#[derive(Clone)]
pub struct SubmissionService {
    manager: ConnectionManager,
}

impl SubmissionService {
    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    fn pool(&self) -> Result<PgPool> {
        self.manager.pool().ok_or(Error::Unavailable)
    }

    /// Single-statement insert: either the whole record persists or
    /// nothing does.
    pub async fn insert(&self, draft: SubmissionDraft) -> Result<Submission> {
        let pool = self.pool()?;
        let record = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (name, phone, email, school, class, language, answers, score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, phone, email, school, class, language, answers, score, submitted_at
            "#,
        )
        .bind(draft.name)
        .bind(draft.phone)
        .bind(draft.email)
        .bind(draft.school)
        .bind(draft.class_name)
        .bind(draft.language)
        .bind(draft.answers)
        .bind(draft.score)
        .fetch_one(&pool)
        .await?;
        Ok(record)
    }

    /// Full scan, most recent first. No pagination; the service targets
    /// low-volume quiz runs.
    pub async fn list_all(&self) -> Result<Vec<Submission>> {
        let pool = self.pool()?;
        let records = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, name, phone, email, school, class, language, answers, score, submitted_at
            FROM submissions
            ORDER BY submitted_at DESC
            "#,
        )
        .fetch_all(&pool)
        .await?;
        Ok(records)
    }
}
