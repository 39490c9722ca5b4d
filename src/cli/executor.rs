//! Command executor for dispatching CLI commands

use super::handlers::{SchemaCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use super::{init_logger_from_settings, load_and_merge_config};
use crate::error::{AppError, AppResult};

/// Execute the parsed command. No subcommand means `serve`.
///
/// `schema` runs without configuration or logging; `serve` loads and merges
/// configuration, initialises the logger and then runs.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli) -> AppResult<()> {
    cli.validate()
        .map_err(|msg| AppError::invalid_argument("cli_arguments", msg))?;

    match &cli.command {
        Some(Commands::Schema { output }) => SchemaCommandHandler::new(output.clone()).execute(),
        Some(Commands::Serve { dry_run, .. }) => serve(cli, *dry_run).await,
        None => serve(cli, false).await,
    }
}

async fn serve(cli: &Cli, dry_run: bool) -> AppResult<()> {
    let (settings, environment) = load_and_merge_config(cli)?;
    init_logger_from_settings(&settings)?;

    ServeCommandHandler::new(settings, environment)
        .execute(dry_run)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_execute_schema_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.graphql");
        let cli = Cli::try_parse_from(["users-graphql", "schema", "-o", path.to_str().unwrap()])
            .unwrap();

        execute_command(&cli).await.unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("getUsers"));
    }

    #[tokio::test]
    async fn test_execute_rejects_invalid_argument_combination() {
        let cli = Cli::try_parse_from(["users-graphql", "serve", "--host", "0.0.0.0", "--port", "80"])
            .unwrap();

        let err = execute_command(&cli).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument { ref field, .. } if field == "cli_arguments"));
    }
}
