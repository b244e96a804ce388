//! CLI command implementations

pub mod add;
pub mod list;
pub mod remove;
pub mod sort;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Config;
use crate::store::TASKS_FILE;

#[derive(Parser)]
#[command(name = "td", version, about = "Local task list with priorities and deadlines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(add::AddArgs),

    /// List tasks
    List(list::ListArgs),

    /// Remove a task by its list position
    Remove(remove::RemoveArgs),

    /// Sort tasks by priority or deadline
    Sort(sort::SortArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Resolve the tasks file: `--file` flag first, then the config override,
/// then `tasks.json` in the working directory.
pub fn resolve_tasks_path(file: Option<PathBuf>, config: &Config) -> PathBuf {
    file.or_else(|| config.tasks_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(TASKS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_prefers_flag() {
        let config = Config {
            tasks_file: Some("/from/config.json".to_string()),
            ..Config::default()
        };
        let path = resolve_tasks_path(Some(PathBuf::from("/from/flag.json")), &config);
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_resolve_path_falls_back_to_config() {
        let config = Config {
            tasks_file: Some("/from/config.json".to_string()),
            ..Config::default()
        };
        let path = resolve_tasks_path(None, &config);
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_resolve_path_default() {
        let path = resolve_tasks_path(None, &Config::default());
        assert_eq!(path, PathBuf::from("tasks.json"));
    }
}
