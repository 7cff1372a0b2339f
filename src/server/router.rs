//! Router configuration for the HTTP front door.

use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with both photo routes and request tracing.
///
/// Unmatched paths fall through to the date route.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::photos))
        .route("/past", any(handlers::past))
        .fallback(handlers::photos)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
