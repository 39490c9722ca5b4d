//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// GraphQL API over an in-memory user store
#[derive(Parser, Debug)]
#[command(name = "users-graphql")]
#[command(about = "GraphQL API over an in-memory user store")]
#[command(long_about = "
users-graphql serves a GraphQL API for creating, listing, looking up and
deleting users together with their user data and address. Data lives in
process memory and is lost on restart.

EXAMPLES:
    # Start the server with default configuration
    users-graphql serve

    # Start server on custom host and port
    users-graphql serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    users-graphql --config /path/to/config.toml serve

    # Run with production settings and verbose logging
    users-graphql --env production --verbose serve

    # Check configuration without starting server
    users-graphql serve --dry-run

    # Write the GraphQL schema to a file
    users-graphql schema --output schema.graphql
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this single TOML file instead of the layered `config/` directory.
    /// Environment variable overrides still apply.
    ///
    /// Example: --config /etc/users-graphql/production.toml
    #[arg(short, long, global = true, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `config/{environment}.toml` layer is loaded.
    /// Takes precedence over USERS_GRAPHQL_APP_ENV.
    #[arg(short, long, global = true, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Lowers the log level to error. Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the GraphQL server (default)
    ///
    /// Examples:
    ///   users-graphql serve                           # Start with defaults
    ///   users-graphql serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   users-graphql serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// from any interface.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on (1-65535)
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Overrides both configuration file settings and global --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the GraphQL schema (SDL)
    ///
    /// Examples:
    ///   users-graphql schema                          # Print to stdout
    ///   users-graphql schema --output schema.graphql  # Write to a file
    Schema {
        /// File to write the SDL to instead of stdout
        #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_output_path)]
        output: Option<PathBuf>,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Checks argument combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(Commands::Serve {
            host: Some(host),
            port: Some(port),
            ..
        }) = &self.command
        {
            if host == "0.0.0.0" && *port < 1024 {
                return Err("Binding to 0.0.0.0 on a privileged port (< 1024) typically requires root privileges".to_string());
            }
        }

        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
