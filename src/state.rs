//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::api::graphql::{UserSchema, build_schema};
use crate::config::GraphqlConfig;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Cloning is cheap: the store, the services and the schema all sit behind
/// `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Executable schema sharing `services` as resolver data
    pub schema: UserSchema,
    pub graphql: GraphqlConfig,
}

impl AppState {
    /// Creates a new AppState over an empty store.
    pub fn new(graphql: GraphqlConfig) -> Self {
        let services = Services::new(Repositories::new());
        let schema = build_schema(services.clone(), &graphql);
        Self {
            services,
            schema,
            graphql,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewUser, NewUserData};

    #[tokio::test]
    async fn test_schema_and_services_share_the_store() {
        let state = AppState::new(GraphqlConfig::default());
        state
            .services
            .users
            .add_user(NewUser::default(), NewUserData::default())
            .unwrap();

        let response = state.schema.execute("{ getUsers { id } }").await;
        let data = response.data.into_json().unwrap();
        assert_eq!(data["getUsers"].as_array().unwrap().len(), 1);
    }
}
