use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use crate::database::connection::ConnectionState;
use crate::dto::submission_dto::{ListResponse, SubmitRequest, SubmitResponse};
use crate::error::{Error, Result};
use crate::AppState;

/// POST /api/users. Readiness is checked before anything else; the store
/// is never touched while disconnected.
#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<impl IntoResponse> {
    if state.manager.current_state() != ConnectionState::Connected {
        return Err(Error::Unavailable);
    }

    let draft = state.validator.validate(&payload)?;
    let record = state.submissions.insert(draft).await?;
    info!(user_id = %record.id, name = %record.name, "submission saved");

    Ok((StatusCode::CREATED, Json(SubmitResponse::created(&record))))
}

/// GET /api/users.
#[axum::debug_handler]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    if state.manager.current_state() != ConnectionState::Connected {
        return Err(Error::Unavailable);
    }

    let users = state.submissions.list_all().await?;
    Ok((StatusCode::OK, Json(ListResponse::new(users))))
}

/// GET /api/admin/users. Same payload contract as the public list; the
/// admin bearer-token check runs in middleware before this handler.
#[axum::debug_handler]
pub async fn admin_list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    if state.manager.current_state() != ConnectionState::Connected {
        return Err(Error::Unavailable);
    }

    let users = state.submissions.list_all().await?;
    Ok((StatusCode::OK, Json(ListResponse::new(users))))
}
