//! Display and seeding settings.
//!
//! The settings file is `~/.config/book-catalog/settings.toml`. Every key is
//! optional; a missing file means all defaults. The catalog itself is never
//! written anywhere, so this file is only ever read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CliError;

const DEFAULT_COLUMNS: usize = 3;
const DEFAULT_CARD_WIDTH: usize = 28;
const MIN_CARD_WIDTH: usize = 12;

/// Canonical path to the settings file: `~/.config/book-catalog/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("book-catalog").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub display: DisplaySettings,
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DisplaySettings {
    /// Cards per row in the grid
    pub columns: usize,
    /// Inner width of one card, in characters
    pub card_width: usize,
    /// Allow colored output when the terminal supports it
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            card_width: DEFAULT_CARD_WIDTH,
            color: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SeedSettings {
    /// Start with the built-in sample books
    pub samples: bool,
    /// Extra YAML seed file or directory loaded at startup
    pub file: Option<PathBuf>,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            samples: true,
            file: None,
        }
    }
}

impl Settings {
    /// Apply command-line overrides on top of the file values.
    pub(crate) fn with_overrides(
        mut self,
        columns: Option<usize>,
        seed: Option<PathBuf>,
        no_samples: bool,
    ) -> Self {
        if let Some(columns) = columns {
            self.display.columns = columns;
        }
        if seed.is_some() {
            self.seed.file = seed;
        }
        if no_samples {
            self.seed.samples = false;
        }
        self.display.columns = self.display.columns.max(1);
        self.display.card_width = self.display.card_width.max(MIN_CARD_WIDTH);
        self
    }
}

/// Load settings from `path`, falling back to defaults if the file is absent.
pub(crate) fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(CliError::settings(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )));
        }
    };
    toml::from_str(&contents)
        .map_err(|e| CliError::settings(format!("cannot parse {}: {}", path.display(), e)))
}

/// Render the effective settings as TOML for display.
pub(crate) fn settings_to_string(settings: &Settings) -> Result<String, CliError> {
    toml::to_string_pretty(settings).map_err(|e| CliError::settings(e.to_string()))
}
