use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "message": "Quiz submission API",
        "timestamp": Utc::now(),
        "database": state.manager.current_state().as_str(),
        "environment": state.environment,
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = json!({
        "status": "OK",
        "database": state.manager.current_state().as_str(),
        "timestamp": Utc::now(),
        "port": state.port,
    });
    (StatusCode::OK, Json(body))
}
