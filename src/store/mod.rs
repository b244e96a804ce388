//! The task store - an owned, ordered task list plus its JSON persistence
//!
//! Structured records are the single source of truth; display text is
//! derived from them, never parsed back. Every mutating operation rewrites
//! the full tasks file before returning.

pub mod error;
pub mod model;
mod storage;

pub use error::{Result, StoreError};
pub use model::{Priority, Task};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default tasks file, relative to the working directory.
pub const TASKS_FILE: &str = "tasks.json";

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from `path`, replacing nothing: fails with
    /// [`StoreError::Missing`] if the file does not exist and
    /// [`StoreError::Parse`] if its content is malformed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = storage::read_tasks(&path)?;
        Ok(Self { path, tasks })
    }

    /// Open the store at `path`, starting with an empty list if the file
    /// does not exist yet. First-run entry point; other errors propagate.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = match storage::read_tasks(&path) {
            Ok(tasks) => tasks,
            Err(StoreError::Missing(_)) => {
                debug!("no tasks file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self { path, tasks })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the list in its current order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and persist. The name is trimmed; an empty name is
    /// rejected and leaves the list untouched.
    pub fn add(&mut self, name: &str, priority: Priority, deadline: NaiveDate) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        self.tasks.push(Task::new(name, priority, deadline));
        self.save()
    }

    /// Remove the task at `index` (0-based) and persist, returning the
    /// removed record.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(StoreError::InvalidSelection {
                index,
                len: self.tasks.len(),
            });
        }

        let task = self.tasks.remove(index);
        self.save()?;
        Ok(task)
    }

    /// Reorder the whole list ascending by priority ordinal and persist.
    /// Ties carry no order guarantee.
    pub fn sort_by_priority(&mut self) -> Result<()> {
        self.tasks.sort_unstable_by_key(|t| t.priority);
        self.save()
    }

    /// Reorder the whole list ascending by deadline and persist.
    pub fn sort_by_deadline(&mut self) -> Result<()> {
        self.tasks.sort_unstable_by_key(|t| t.deadline);
        self.save()
    }

    /// Rewrite the tasks file with the full current list.
    pub fn save(&self) -> Result<()> {
        storage::write_tasks(&self.path, &self.tasks)
    }

    /// Replace the in-memory list wholesale from disk. On any error the
    /// list is left unchanged.
    pub fn reload(&mut self) -> Result<()> {
        self.tasks = storage::read_tasks(&self.path)?;
        Ok(())
    }
}
