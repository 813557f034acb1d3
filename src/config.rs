use crate::error::{PlacebookError, Result};
use crate::ids::DEFAULT_ID_LENGTH;
use crate::storage::DEFAULT_KEY;
use crate::view::detail::DEFAULT_DATE_FORMAT;
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yml";
pub const LOG_FILE_NAME: &str = "placebook.log";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlacebookConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub tui: TuiSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Data directory; the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: None,
            key: default_key(),
            id_length: default_id_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// chrono format string for the "Added" line.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl TuiSettings {
    /// Rejects chrono format strings containing unknown specifiers.
    pub fn check_date_format(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(PlacebookError::Config(format!(
                "Invalid tui.date_format: {:?}",
                self.date_format
            )));
        }
        Ok(())
    }
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default)]
    pub verbose: bool,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "placebook")
}

impl PlacebookConfig {
    /// Loads `path` if given (it must exist), otherwise the default config
    /// file if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(PlacebookError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&config_path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PlacebookConfig = serde_yaml::from_str(&content)?;
        config.tui.check_date_format()?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolves the data directory, preferring `override_dir`.
    pub fn data_path(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(ref path) = self.store.path {
            return Ok(PathBuf::from(path));
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                PlacebookError::Config("Could not determine a data directory".to_string())
            })
    }

    /// Configured log file, or `placebook.log` inside `data_dir`.
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        self.log
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LOG_FILE_NAME))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
