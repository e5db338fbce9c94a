use std::collections::HashMap;
use std::path::{Path, PathBuf};

use puzzle_convert::{ConvertOptions, Preset};
use serde::Deserialize;

use crate::error::PuzzleError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "PIXELPUZZLE_CONFIG";

/// Category used when neither the command line nor the config names one.
pub const DEFAULT_CATEGORY: &str = "animals";

/// Application configuration loaded from a YAML file.
///
/// Every field is optional; anything left out falls back to the preset.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Named bundle of conversion defaults
    #[serde(default)]
    pub preset: Option<Preset>,

    /// Puzzle width in cells
    #[serde(default)]
    pub size: Option<u32>,

    /// Palette size (0 = auto)
    #[serde(default)]
    pub colors: Option<usize>,

    /// Default category for converted puzzles
    #[serde(default)]
    pub category: Option<String>,

    /// Minimum alpha for a pixel to be painted
    #[serde(default)]
    pub opacity_threshold: Option<u8>,

    /// Prefix removed from file stems before deriving ids and names
    #[serde(default)]
    pub strip_prefix: Option<String>,

    /// Folder name to category, used by recursive batch runs
    #[serde(default)]
    pub categories: HashMap<String, String>,
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub preset: Option<Preset>,
    pub size: Option<u32>,
    pub colors: Option<usize>,
    pub category: Option<String>,
    pub opacity_threshold: Option<u8>,
}

impl AppConfig {
    /// Parse YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, PuzzleError> {
        serde_yaml::from_str(content).map_err(|e| PuzzleError::Config(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> Result<Self, PuzzleError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PuzzleError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    /// Locate the config file: the explicit path first, then
    /// [`CONFIG_ENV_VAR`].
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Load the config, falling back to defaults (with a warning) when the
    /// file cannot be read or parsed. No file at all is not a warning.
    pub fn load(explicit: Option<&Path>) -> Self {
        let Some(path) = Self::locate(explicit) else {
            tracing::debug!("No config file, using preset defaults");
            return Self::default();
        };

        match Self::from_path(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    preset = ?config.preset,
                    categories = config.categories.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve conversion options: CLI flag, then config file, then preset.
    pub fn convert_options(&self, cli: &CliOverrides) -> ConvertOptions {
        let preset = cli.preset.or(self.preset).unwrap_or_default();
        let mut options = ConvertOptions::preset(preset);

        if let Some(size) = cli.size.or(self.size) {
            options = options.target_width(size);
        }
        if let Some(colors) = cli.colors.or(self.colors) {
            options = options.colors(colors);
        }
        if let Some(threshold) = cli.opacity_threshold.or(self.opacity_threshold) {
            options = options.opacity_threshold(threshold);
        }
        options
    }

    /// Resolve the default category with the same precedence.
    pub fn category(&self, cli: &CliOverrides) -> String {
        cli.category
            .clone()
            .or_else(|| self.category.clone())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
    }
}
