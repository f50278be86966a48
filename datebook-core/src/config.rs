//! Global configuration, stored at `~/.config/datebook/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DatebookError, DatebookResult};
use crate::month::WeekStart;
use crate::snapshot::SNAPSHOT_FILE;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("datebook")
}

fn is_default_data_dir(path: &Path) -> bool {
    path == default_data_dir()
}

/// Global configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatebookConfig {
    /// Directory holding the events snapshot. `~` is expanded.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// First day of the week in the month grid.
    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for DatebookConfig {
    fn default() -> Self {
        DatebookConfig {
            data_dir: default_data_dir(),
            week_start: WeekStart::default(),
        }
    }
}

impl DatebookConfig {
    /// Path to the config file (~/.config/datebook/config.toml)
    pub fn config_path() -> DatebookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DatebookError::Config("Could not determine config directory".to_string()))?
            .join("datebook");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default template on first run.
    pub fn load() -> DatebookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: DatebookConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| DatebookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DatebookError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current settings back to config.toml.
    pub fn save(&self) -> DatebookResult<()> {
        let config_path = Self::config_path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| DatebookError::Config(e.to_string()))?;
        std::fs::write(&config_path, content)
            .map_err(|e| DatebookError::Config(format!("Could not write config file: {e}")))?;
        Ok(())
    }

    /// Where the events snapshot lives, with `~` expanded.
    pub fn snapshot_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded).join(SNAPSHOT_FILE)
    }

    fn create_default_config(path: &Path) -> DatebookResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DatebookError::Config(format!("Could not create config directory: {e}")))?;
        }

        let contents = format!(
            "\
# datebook configuration

# Directory holding the events snapshot:
# data_dir = \"{}\"

# First day of the week in the month grid (\"sunday\" or \"monday\"):
# week_start = \"sunday\"
",
            default_data_dir().display()
        );

        std::fs::write(path, contents)
            .map_err(|e| DatebookError::Config(format!("Could not write default config: {e}")))?;
        Ok(())
    }
}
