//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Storage health check
//! - `/api/*`       - Referral and user REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes without rate limiting or path normalization.
///
/// The rate limiter keys on the peer address, which is only available when
/// serving with connect info; in-process test clients use this router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application served over TCP, with all middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = router(state).layer(rate_limit::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
