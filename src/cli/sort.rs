//! `sort` - reorder the whole list by priority or deadline

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::store::TaskStore;

#[derive(Args)]
pub struct SortArgs {
    /// Sort key (priority, deadline)
    key: String,

    /// Path to the tasks file
    #[arg(long, env = "TASKDECK_FILE")]
    file: Option<PathBuf>,
}

pub fn run(args: SortArgs) -> Result<()> {
    let config = Config::load()?;
    let path = super::resolve_tasks_path(args.file, &config);

    let mut store = TaskStore::load(path)?;

    match args.key.trim().to_lowercase().as_str() {
        "priority" => store.sort_by_priority()?,
        "deadline" => store.sort_by_deadline()?,
        other => bail!("Unknown sort key: {} (expected priority or deadline)", other),
    }

    println!("Sorted {} tasks by {}", store.len(), args.key.trim().to_lowercase());

    for (i, task) in store.tasks().iter().enumerate() {
        println!("{:>3}. {}", i + 1, task.display_line());
    }

    Ok(())
}
