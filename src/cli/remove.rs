//! `remove` - delete a task by its list position

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::store::TaskStore;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task position as shown by `list` (1-based)
    position: usize,

    /// Path to the tasks file
    #[arg(long, env = "TASKDECK_FILE")]
    file: Option<PathBuf>,
}

pub fn run(args: RemoveArgs) -> Result<()> {
    let config = Config::load()?;
    let path = super::resolve_tasks_path(args.file, &config);

    let Some(index) = args.position.checked_sub(1) else {
        bail!("Positions start at 1");
    };

    let mut store = TaskStore::load(path)?;
    let task = store.remove(index)?;

    println!("Removed: {}", task.display_line());

    Ok(())
}
