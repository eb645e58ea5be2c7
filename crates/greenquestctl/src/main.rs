//! GreenQuest Control - CLI client for the GreenQuest tracker
//!
//! Presents the checklist, gamification stats, and daily history; the only
//! mutation exposed is toggling a task.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "greenquestctl")]
#[command(about = "GreenQuest - gamified waste-management checklist", long_about = None)]
#[command(version)]
struct Cli {
    /// Override the data directory for persisted state
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP, and overall progress
    Status,

    /// List the checklist with completion marks
    Tasks,

    /// Toggle completion for a task by id
    Toggle {
        /// Task id (1-9)
        id: u32,
    },

    /// Show the daily completion history
    History,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();
    let mut tracker = commands::open_tracker(cli.data_dir);

    match cli.command {
        Commands::Status => commands::status(&tracker),
        Commands::Tasks => commands::tasks(&tracker),
        Commands::Toggle { id } => commands::toggle(&mut tracker, id),
        Commands::History => commands::history(&tracker),
    }

    Ok(())
}
