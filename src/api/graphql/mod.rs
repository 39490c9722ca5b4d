//! GraphQL surface: root objects, schema construction and error rendering.

pub mod error;
mod mutation;
mod query;
mod schema;


pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{UserSchema, build_schema, schema_sdl};

use crate::api::dto::UserResponse;
use crate::error::{AppError, AppResult};
use crate::models::User;

/// Rejects an empty ID before any lookup.
fn require_id(id: &str) -> AppResult<()> {
    if id.is_empty() {
        return Err(AppError::invalid_argument(
            "id",
            "User ID cannot be null or empty",
        ));
    }
    Ok(())
}

fn user_list(users: Vec<User>) -> Vec<Option<UserResponse>> {
    users
        .into_iter()
        .map(|user| Some(UserResponse::from(user)))
        .collect()
}
