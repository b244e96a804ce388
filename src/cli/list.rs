//! `list` - print the task list as a numbered, read-only projection

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::store::{StoreError, TaskStore};

#[derive(Args)]
pub struct ListArgs {
    /// Path to the tasks file
    #[arg(long, env = "TASKDECK_FILE")]
    file: Option<PathBuf>,
}

pub fn run(args: ListArgs) -> Result<()> {
    let config = Config::load()?;
    let path = super::resolve_tasks_path(args.file, &config);

    let store = match TaskStore::load(path) {
        Ok(store) => store,
        Err(StoreError::Missing(path)) => {
            println!("No tasks file found at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if store.is_empty() {
        println!("No tasks");
        return Ok(());
    }

    println!("Tasks ({}):\n", store.len());

    for (i, task) in store.tasks().iter().enumerate() {
        println!("{:>3}. {}", i + 1, task.display_line());
    }

    Ok(())
}
