use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "placebook")]
#[command(
    author,
    version,
    about = "A terminal catalog of the places you have visited"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to run (opens the TUI when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to data directory (overrides config)
    #[arg(long, global = true, env = "PLACEBOOK_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Add a visited place
    #[command(visible_alias = "new")]
    Add {
        /// Name of the place
        name: String,

        /// Country the place is in
        #[arg(short, long)]
        country: Option<String>,

        /// When you visited, free text (e.g. "Spring 2024")
        #[arg(short = 'w', long)]
        visit: Option<String>,

        /// Landmarks or highlights (use \n for several lines)
        #[arg(short, long)]
        landmarks: Option<String>,

        /// Notes and memories
        #[arg(short, long)]
        notes: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List places, newest first
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a place's details (the most recent one when no id is given)
    Show {
        /// Place ID
        id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove every stored place
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Open the interactive terminal UI
    Tui,
}

impl Commands {
    /// Commands that take over the terminal and must not log to stderr.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Tui)
    }
}
