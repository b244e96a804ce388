//! Tasks file persistence - a JSON array rewritten in full on every save

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{Result, StoreError};
use super::Task;

pub(crate) fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Err(StoreError::Missing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(&content)?;
    debug!("loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

pub(crate) fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Create backup
    if path.exists() {
        let backup_path = path.with_extension("json.bak");
        if let Err(e) = fs::copy(path, &backup_path) {
            warn!("Failed to create backup: {}", e);
        }
    }

    let content = serde_json::to_string_pretty(tasks)?;
    fs::write(path, content)?;
    debug!("wrote {} tasks to {}", tasks.len(), path.display());
    Ok(())
}
