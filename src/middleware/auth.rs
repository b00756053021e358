use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::error::Error;
use crate::AppState;

/// Bearer-token gate for the admin list. With no ADMIN_TOKEN configured
/// the endpoint stays closed rather than falling open.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.admin_token.as_deref() else {
        return Error::Unauthorized("Admin access is not configured".to_string()).into_response();
    };

    let presented = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match presented {
        Some(token) if bool::from(token.as_bytes().ct_eq(expected.as_bytes())) => {
            next.run(req).await
        }
        _ => Error::Unauthorized("Invalid or missing admin token".to_string()).into_response(),
    }
}
