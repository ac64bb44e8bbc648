use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use crate::api;

/// Request body budget per record in an insert batch.
pub const MAX_RECORD_BYTES: usize = 64 * 1024;

/// Build the complete axum Router with all API routes.
///
/// The body limit scales with `max_batch_size` so a full batch is never
/// rejected by axum's default 2 MB cap before its records are counted.
pub fn build(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_batch_size
        .saturating_mul(MAX_RECORD_BYTES);

    Router::new()
        .nest("/v1/events", api::events::routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
