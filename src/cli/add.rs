//! `add` - append a task to the list

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::store::{Priority, TaskStore};

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    name: String,

    /// Priority (low, medium, high)
    #[arg(short, long)]
    priority: Option<String>,

    /// Deadline (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    deadline: Option<String>,

    /// Path to the tasks file
    #[arg(long, env = "TASKDECK_FILE")]
    file: Option<PathBuf>,
}

pub fn run(args: AddArgs) -> Result<()> {
    let config = Config::load()?;
    let path = super::resolve_tasks_path(args.file, &config);

    let priority = match &args.priority {
        Some(s) => Priority::parse(s).ok_or_else(|| anyhow!("Unknown priority: {}", s))?,
        None => Priority::parse(&config.default_priority).unwrap_or_default(),
    };

    let deadline = match &args.deadline {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow!("Invalid deadline (expected YYYY-MM-DD): {}", s))?,
        None => Local::now().date_naive(),
    };

    let mut store = TaskStore::open(path)?;
    store.add(&args.name, priority, deadline)?;

    if let Some(task) = store.tasks().last() {
        println!("Added: {}", task.display_line());
    }

    Ok(())
}
