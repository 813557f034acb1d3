use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use placebook::cli::handlers::{
    AddParams, CommandContext, handle_add, handle_clear, handle_init, handle_list, handle_show,
    handle_tui,
};
use placebook::cli::{Cli, Commands};
use placebook::config::PlacebookConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    let interactive = command.is_interactive();
    let globals = Globals {
        config: cli.config.map(PathBuf::from),
        data_dir: cli.data_dir.map(PathBuf::from),
        verbose: cli.verbose,
        log_file: cli.log_file.map(PathBuf::from),
    };

    match command {
        Commands::Init { force } => {
            placebook::logging::init(globals.verbose, globals.log_file, true);
            handle_init(globals.config, globals.data_dir.as_deref(), force)
        }
        Commands::Add {
            name,
            country,
            visit,
            landmarks,
            notes,
            json,
        } => handle_add(
            &globals.context(interactive)?,
            AddParams {
                name,
                country,
                visit,
                landmarks,
                notes,
                json,
            },
        ),
        Commands::List { json } => handle_list(&globals.context(interactive)?, json),
        Commands::Show { id, json } => handle_show(&globals.context(interactive)?, id, json),
        Commands::Clear { force } => handle_clear(&globals.context(interactive)?, force),
        Commands::Tui => handle_tui(globals.context(interactive)?),
    }
}

/// Options shared by every subcommand
struct Globals {
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    verbose: bool,
    log_file: Option<PathBuf>,
}

impl Globals {
    /// Loads config, starts logging and opens the store.
    ///
    /// The TUI owns the terminal, so it logs to a file instead of stderr.
    fn context(self, interactive: bool) -> Result<CommandContext> {
        let config = PlacebookConfig::load(self.config.as_deref())?;
        let data_dir = config.data_path(self.data_dir.as_deref())?;

        let log_file = self
            .log_file
            .or_else(|| config.log.file.as_ref().map(PathBuf::from))
            .or_else(|| interactive.then(|| config.log_path(&data_dir)));
        placebook::logging::init(self.verbose || config.log.verbose, log_file, !interactive);

        tracing::debug!(data_dir = %data_dir.display(), "Starting placebook");
        Ok(CommandContext::new(config, data_dir))
    }
}
