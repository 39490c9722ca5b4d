//! Rendering of `AppError` as GraphQL errors.

use async_graphql::{Context, ErrorExtensions};

use crate::api::middleware::RequestId;
use crate::error::{AppError, AppResult};

/// Classification attached to errors the client caused
pub const BAD_REQUEST: &str = "BAD_REQUEST";

/// Classification attached to process failures
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let (message, classification) = if self.is_client_error() {
            (self.to_string(), BAD_REQUEST)
        } else {
            ("Internal server error".to_string(), INTERNAL_ERROR)
        };

        async_graphql::Error::new(message)
            .extend_with(|_, extensions| extensions.set("classification", classification))
    }
}

/// Converts service results into resolver results, logging each failure
/// against the current request.
pub(crate) trait ResolverResultExt<T> {
    fn or_reject(self, ctx: &Context<'_>, operation: &'static str) -> async_graphql::Result<T>;
}

impl<T> ResolverResultExt<T> for AppResult<T> {
    fn or_reject(self, ctx: &Context<'_>, operation: &'static str) -> async_graphql::Result<T> {
        self.map_err(|error| {
            let request_id = ctx
                .data_opt::<RequestId>()
                .map(RequestId::as_str)
                .unwrap_or("none");

            if error.is_client_error() {
                tracing::warn!(operation, request_id, error = %error, "GraphQL operation rejected");
            } else {
                tracing::error!(operation, request_id, error = ?error, "GraphQL operation failed");
            }

            error.extend()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Resource, UniqueKey};

    fn classification(error: &async_graphql::Error) -> Option<async_graphql::Value> {
        error
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("classification"))
            .cloned()
    }

    #[test]
    fn test_domain_errors_keep_message() {
        let error = AppError::duplicate(UniqueKey::Telephone).extend();
        assert_eq!(error.message, "User with the same telephone number already exists");
        assert_eq!(
            classification(&error),
            Some(async_graphql::Value::from(BAD_REQUEST))
        );

        let error = AppError::not_found(Resource::Address, "u1").extend();
        assert_eq!(error.message, "Address for the given user ID does not exist");
    }

    #[test]
    fn test_internal_errors_are_sanitized() {
        let error = AppError::from(anyhow::anyhow!("Store lock poisoned")).extend();
        assert_eq!(error.message, "Internal server error");
        assert_eq!(
            classification(&error),
            Some(async_graphql::Value::from(INTERNAL_ERROR))
        );
    }
}
