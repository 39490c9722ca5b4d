//! Health check endpoint handlers.
//!
//! The only dependency is the in-memory store, so readiness reduces to the
//! store lock being usable.

use std::collections::HashMap;

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use jiff::Timestamp;

use crate::api::dto::{ComponentHealth, HealthResponse, HealthStatus};
use crate::state::AppState;

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Basic health check
/// - `GET /health/ready` - Readiness probe
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
}

/// Basic health check endpoint.
///
/// # Example Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T12:00:00Z",
///   "checks": {
///     "store": { "status": "healthy", "message": "Available", "users": 3 }
///   }
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store = check_store(&state);
    let status = store.status;

    let mut checks = HashMap::new();
    checks.insert("store".to_string(), store);

    let response = HealthResponse {
        status,
        version: crate::pkg_version().to_string(),
        timestamp: Timestamp::now().to_string(),
        checks,
    };

    let code = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(response))
}

pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    match check_store(&state).status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Liveness probe; answering at all is the signal.
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

fn check_store(state: &AppState) -> ComponentHealth {
    match state.services.users.count_users() {
        Ok(users) => ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("Available".to_string()),
            users: Some(users),
        },
        Err(e) => {
            tracing::error!(error = ?e, "Store health check failed");
            ComponentHealth {
                status: HealthStatus::Unhealthy,
                message: Some("Store unavailable".to_string()),
                users: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphqlConfig;
    use crate::models::{NewUser, NewUserData};

    #[tokio::test]
    async fn test_liveness_check() {
        assert_eq!(liveness_check().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_check_reports_user_count() {
        let state = AppState::new(GraphqlConfig::default());
        state
            .services
            .users
            .add_user(NewUser::default(), NewUserData::default())
            .unwrap();

        let (code, Json(response)) = health_check(State(state)).await;
        assert_eq!(code, StatusCode::OK);
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.checks["store"].users, Some(1));
        assert!(response.timestamp.parse::<Timestamp>().is_ok());
    }

    #[tokio::test]
    async fn test_readiness_check() {
        let state = AppState::new(GraphqlConfig::default());
        assert_eq!(readiness_check(State(state)).await, StatusCode::OK);
    }
}
