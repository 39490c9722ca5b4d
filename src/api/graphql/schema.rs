use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::config::GraphqlConfig;
use crate::services::Services;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with `services` as resolver data.
pub fn build_schema(services: Services, config: &GraphqlConfig) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .limit_depth(config.depth_limit)
        .limit_complexity(config.complexity_limit)
        .finish()
}

/// SDL of the schema, independent of any store.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}
