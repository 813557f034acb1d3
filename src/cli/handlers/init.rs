use crate::config::PlacebookConfig;
use crate::error::PlacebookError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

pub fn handle_init(
    config_path: Option<PathBuf>,
    data_dir: Option<&Path>,
    force: bool,
) -> Result<()> {
    let config_path = config_path
        .or_else(PlacebookConfig::default_path)
        .context("Could not determine a config directory; pass --config")?;

    if config_path.exists() && !force {
        return Err(PlacebookError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = PlacebookConfig::default();
    config.save(&config_path)?;

    println!("{} config at {}", "Wrote".green(), config_path.display());
    if let Ok(data_dir) = config.data_path(data_dir) {
        println!("  Data:   {}", data_dir.display());
    }

    Ok(())
}
