use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Strict allow-list CORS. Origins that fail to parse are skipped with a
/// warning; an empty list means no cross-origin access at all.
pub fn allow_list_cors(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
        .allow_origin(parsed)
}
