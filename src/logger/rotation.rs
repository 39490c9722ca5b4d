//! Numbered size-based rotation
//!
//! The active file `app.log` is shifted to `app.log.1`, the previous
//! `app.log.1` to `app.log.2`, and so on up to `max_files`; the oldest file
//! falls off the end.

use std::fs;
use std::path::{Path, PathBuf};

use crate::logger::config::RotationConfig;
use crate::logger::error::LoggerError;

pub(crate) struct RotationManager {
    config: RotationConfig,
}

impl RotationManager {
    pub(crate) fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    pub(crate) fn should_rotate(&self, current_size: u64) -> bool {
        current_size >= self.config.max_size
    }

    /// Shift every rotated file up by one and move the active file to `.1`.
    pub(crate) fn rotate(&self, active: &Path) -> Result<(), LoggerError> {
        let oldest = rotated_path(active, self.config.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest).map_err(|e| LoggerError::io(&oldest, e))?;
        }

        for index in (1..self.config.max_files).rev() {
            let from = rotated_path(active, index);
            if from.exists() {
                let to = rotated_path(active, index + 1);
                fs::rename(&from, &to).map_err(|e| LoggerError::io(&from, e))?;
            }
        }

        if active.exists() {
            let first = rotated_path(active, 1);
            fs::rename(active, &first).map_err(|e| LoggerError::io(active, e))?;
        }

        Ok(())
    }
}

/// `<active>.<index>`
pub(crate) fn rotated_path(active: &Path, index: usize) -> PathBuf {
    let mut name = active.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}
