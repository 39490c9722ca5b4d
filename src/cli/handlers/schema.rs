//! Schema command handler
//!
//! Prints the GraphQL SDL without loading configuration or starting a server.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::api::graphql::schema_sdl;
use crate::error::AppResult;

pub struct SchemaCommandHandler {
    output: Option<PathBuf>,
}

impl SchemaCommandHandler {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    /// Write the SDL to the output file, or stdout when none is set.
    pub fn execute(&self) -> AppResult<()> {
        let sdl = schema_sdl();

        match self.output {
            Some(ref path) => {
                fs::write(path, &sdl)
                    .with_context(|| format!("Failed to write schema to {}", path.display()))?;
                eprintln!("Schema written to {}", path.display());
            }
            None => print!("{sdl}"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_schema_written_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("schema.graphql");

        SchemaCommandHandler::new(Some(path.clone())).execute().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, schema_sdl());
        assert!(written.contains("type Query"));
        assert!(written.contains("type Mutation"));
    }

    #[test]
    fn test_unwritable_output_is_internal_error() {
        let dir = tempdir().unwrap();
        let result = SchemaCommandHandler::new(Some(dir.path().to_path_buf())).execute();
        assert!(matches!(result, Err(crate::error::AppError::Internal { .. })));
    }
}
