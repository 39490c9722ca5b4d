//! Configuration validation logic
//!
//! Range and format checks for every settings section. The first failing
//! rule is reported.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, GraphqlConfig, LoggerSettings, ServerConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host is required. Use 127.0.0.1 for local access or 0.0.0.0 for all interfaces.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        Ok(())
    }
}

impl GraphqlConfig {
    /// # Validation Rules
    /// - Path must start with '/' and must not be the health route
    /// - Depth and complexity limits must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.path.starts_with('/') || self.path.len() < 2 {
            return Err(ConfigError::validation(
                "graphql.path",
                format!("GraphQL path must start with '/' and name a route, got '{}'.", self.path),
            ));
        }

        if self.path == "/health" || self.path.starts_with("/health/") {
            return Err(ConfigError::validation(
                "graphql.path",
                "GraphQL path cannot overlap the /health routes.",
            ));
        }

        if self.depth_limit == 0 {
            return Err(ConfigError::validation(
                "graphql.depth_limit",
                "Depth limit must be greater than 0.",
            ));
        }

        if self.complexity_limit == 0 {
            return Err(ConfigError::validation(
                "graphql.complexity_limit",
                "Complexity limit must be greater than 0.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if self.rotation.max_size == 0 {
            return Err(ConfigError::validation(
                "logger.file.rotation.max_size",
                "Maximum file size must be greater than 0 bytes.",
            ));
        }

        if self.rotation.max_files == 0 {
            return Err(ConfigError::validation(
                "logger.file.rotation.max_files",
                "Maximum number of rotated files must be greater than 0.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - At least one output must be enabled
    /// - File settings must be usable when file output is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one output (console or file) must be enabled.",
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.graphql.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_server_config_invalid_port_zero() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.port");
    }

    #[test]
    fn test_server_config_empty_host() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "server.host");
    }

    #[test]
    fn test_graphql_config_path_rules() {
        for path in ["graphql", "/", "/health", "/health/live"] {
            let config = GraphqlConfig {
                path: path.to_string(),
                ..Default::default()
            };
            assert_eq!(
                field_of(config.validate().unwrap_err()),
                "graphql.path",
                "path '{}' should be rejected",
                path
            );
        }

        let config = GraphqlConfig {
            path: "/api/graphql".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_graphql_config_zero_limits() {
        let config = GraphqlConfig {
            depth_limit: 0,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "graphql.depth_limit");

        let config = GraphqlConfig {
            complexity_limit: 0,
            ..Default::default()
        };
        assert_eq!(field_of(config.validate().unwrap_err()), "graphql.complexity_limit");
    }

    #[test]
    fn test_logger_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.level");
    }

    #[test]
    fn test_logger_level_case_insensitive() {
        let settings = LoggerSettings {
            level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_logger_requires_an_output() {
        let mut settings = LoggerSettings::default();
        settings.console.enabled = false;
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger");
    }

    #[test]
    fn test_logger_file_rules() {
        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.path = String::new();
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.file.path");

        let mut settings = LoggerSettings::default();
        settings.file.format = "yaml".to_string();
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.file.format");

        let mut settings = LoggerSettings::default();
        settings.file.rotation.max_files = 0;
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.rotation.max_files"
        );
    }
}
