//! Task list served to clients whose data source is remote.

use std::path::{Path, PathBuf};

use taskgate::state::tasks::Task;

#[derive(Debug, thiserror::Error)]
pub enum TasksFileError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

/// Load the task list from `path`, or an empty list when no file is configured.
pub fn load_tasks(path: Option<&Path>) -> Result<Vec<Task>, TasksFileError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| TasksFileError::Read { path: path.to_owned(), source })?;
    serde_json::from_str(&raw).map_err(|source| TasksFileError::Parse { path: path.to_owned(), source })
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;
