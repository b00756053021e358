use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// How a store connection attempt failed; drives the categorized
/// diagnostics logged by the connection manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFailureKind {
    Authentication,
    Network,
    Timeout,
}

impl ConnectFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectFailureKind::Authentication => "authentication",
            ConnectFailureKind::Network => "network",
            ConnectFailureKind::Timeout => "timeout",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store connection failed ({}): {message}", .kind.as_str())]
    Connection {
        kind: ConnectFailureKind,
        message: String,
    },

    #[error("Service unavailable: database not connected")]
    Unavailable,

    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Unavailable => {
                let body = json!({
                    "success": false,
                    "message": "Database not connected. Please try again later.",
                });
                (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
            }
            Error::Validation(missing) => {
                let body = json!({
                    "success": false,
                    "message": "Missing required fields",
                    "missing": missing,
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Error::Unauthorized(msg) => {
                let body = json!({ "success": false, "message": msg });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            Error::Database(err) => {
                tracing::error!(error = %err, "database operation failed");
                let body = json!({
                    "success": false,
                    "message": "Failed to process submission. Please try again later.",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            Error::Json(err) => {
                let body = json!({ "success": false, "message": err.to_string() });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                let body = json!({
                    "success": false,
                    "message": "An unexpected error occurred",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(err)
    }
}

impl Error {
    /// Classify a connection-attempt failure into one of the retryable kinds.
    /// Postgres 28xxx SQLSTATEs are auth failures; pool/IO timeouts are kept
    /// distinct from other network errors.
    pub fn from_connect_error(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(code) if code.starts_with("28") => ConnectFailureKind::Authentication,
                _ => ConnectFailureKind::Network,
            },
            sqlx::Error::PoolTimedOut => ConnectFailureKind::Timeout,
            sqlx::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::TimedOut => {
                ConnectFailureKind::Timeout
            }
            _ => ConnectFailureKind::Network,
        };
        Error::Connection {
            kind,
            message: err.to_string(),
        }
    }
}
