use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("No task at position {index} (list has {len})")]
    InvalidSelection { index: usize, len: usize },

    #[error("Tasks file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to access tasks file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tasks file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
