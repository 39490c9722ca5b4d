//! Router configuration for the API.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID - generates/propagates request IDs
/// 2. Logging - logs requests with request IDs
/// 3. CORS (permissive)
/// 4. Response compression
///
/// # Routes
/// - `/health`, `/health/live`, `/health/ready`
/// - `{graphql.path}` - GraphQL endpoint (POST) and GraphiQL (GET)
pub fn create_router(state: AppState) -> Router {
    let graphql_path = state.graphql.path.clone();

    Router::new()
        .merge(handlers::health::health_routes())
        .merge(handlers::graphql::graphql_routes(&graphql_path))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
