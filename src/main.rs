//! Taskdeck - local task list with priorities and deadlines

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "td", &mut std::io::stdout());
            Ok(())
        }
        Commands::Add(args) => cli::add::run(args),
        Commands::List(args) => cli::list::run(args),
        Commands::Remove(args) => cli::remove::run(args),
        Commands::Sort(args) => cli::sort::run(args),
    }
}
