mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use datebook_core::month::Month;

#[derive(Parser)]
#[command(name = "datebook")]
#[command(about = "Month-grid calendar for named, time-ranged events", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month grid
    Show {
        /// Month to display as YYYY-MM (defaults to the current month)
        month: Option<Month>,
    },
    /// Add an event to a date
    Add {
        /// Target date: DD-MM-YYYY, YYYY-MM-DD, or natural language ("today", "march 20")
        date: Option<String>,
        /// Event name (3-40 characters)
        #[arg(short, long)]
        name: Option<String>,
        /// Start time as HH:MM
        #[arg(short, long)]
        start: Option<String>,
        /// End time as HH:MM (events cover [start, end), so back-to-back is fine)
        #[arg(short, long)]
        end: Option<String>,
        /// Event description (3-150 characters)
        #[arg(short, long)]
        desc: Option<String>,
    },
    /// List a date's events
    Events {
        /// Target date
        date: String,
        /// Keep only events whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Remove the event starting at a given time
    Remove {
        /// Target date
        date: String,
        /// Start time of the event to remove, as HH:MM
        start: String,
    },
    /// Browse months and days interactively
    Browse {
        /// Month to start from as YYYY-MM (defaults to the current month)
        month: Option<Month>,
    },
    /// Show or change configuration
    Config {
        /// Set the first day of the week ("sunday" or "monday")
        #[arg(long)]
        week_start: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { month } => commands::show::run(month),
        Commands::Add {
            date,
            name,
            start,
            end,
            desc,
        } => commands::add::run(date.as_deref(), name, start, end, desc),
        Commands::Events { date, filter } => commands::events::run(&date, filter.as_deref()),
        Commands::Remove { date, start } => commands::remove::run(&date, &start),
        Commands::Browse { month } => commands::browse::run(month),
        Commands::Config { week_start } => commands::config::run(week_start.as_deref()),
    }
}
