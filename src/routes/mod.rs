pub mod health;
pub mod submissions;

use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route(
            "/api/users",
            get(submissions::list).post(submissions::submit),
        )
        .route(
            "/api/admin/users",
            get(submissions::admin_list).layer(axum::middleware::from_fn_with_state(
                state.clone(),
                crate::middleware::auth::require_admin,
            )),
        )
        .fallback(not_found)
        .with_state(state)
}

pub async fn not_found(uri: Uri) -> impl IntoResponse {
    let body = json!({
        "success": false,
        "message": "Route not found",
        "path": uri.path(),
    });
    (StatusCode::NOT_FOUND, Json(body))
}
