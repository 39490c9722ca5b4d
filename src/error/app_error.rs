use std::fmt;

use thiserror::Error;

use crate::config::error::ConfigError;

/// Fields that must be unique across every stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    Id,
    SubKeycloak,
    Telephone,
    Email,
}

impl UniqueKey {
    /// GraphQL field name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueKey::Id => "id",
            UniqueKey::SubKeycloak => "subKeycloak",
            UniqueKey::Telephone => "telephone",
            UniqueKey::Email => "email",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            UniqueKey::Id => "id",
            UniqueKey::SubKeycloak => "Keycloak sub",
            UniqueKey::Telephone => "telephone number",
            UniqueKey::Email => "email",
        }
    }
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records that can be looked up by user ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    UserData,
    Address,
}

impl Resource {
    fn missing_message(&self) -> &'static str {
        match self {
            Resource::User => "User with the given ID does not exist",
            Resource::UserData => "User data for the given user ID does not exist",
            Resource::Address => "Address for the given user ID does not exist",
        }
    }
}

/// Application-wide error type.
///
/// The first three variants are the domain failures a client can cause and
/// their `Display` output is the exact message returned to the client. The
/// remaining variants cover process-level failures and are never shown
/// verbatim to GraphQL clients.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required argument was missing or empty
    #[error("{message}")]
    InvalidArgument { field: String, message: String },

    /// A uniqueness constraint would be violated by a new user
    #[error("User with the same {} already exists", .key.description())]
    DuplicateKey { key: UniqueKey },

    /// No stored user matches the requested ID
    #[error("{}", .resource.missing_message())]
    NotFound { resource: Resource, id: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate(key: UniqueKey) -> Self {
        AppError::DuplicateKey { key }
    }

    pub fn not_found(resource: Resource, id: impl Into<String>) -> Self {
        AppError::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Whether the error was caused by the request rather than the process.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidArgument { .. } | AppError::DuplicateKey { .. } | AppError::NotFound { .. }
        )
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "configuration".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
