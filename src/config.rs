//! Configuration management for slotgrid
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED};
use crate::graphic::Rows;
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub graphic: GraphicConfig,
    pub pagination: PaginationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicConfig {
    /// Window title, omitted for an untitled grid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Slot count: 9, 18, 27, 36, 45 or 54
    pub size: usize,
}

/// Pagination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub previous_slot: usize,
    pub next_slot: usize,
    /// Content cells, in display order
    pub bounds: Vec<usize>,
    /// Slot of the filler shown on empty pages, omitted to disable it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blank_slot: Option<usize>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Print slot indices in empty cells
    pub show_slot_numbers: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for GraphicConfig {
    fn default() -> Self {
        Self {
            title: Some("Crate Browser".to_string()),
            size: Rows::Medium.slots(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            previous_slot: 27,
            next_slot: 35,
            bounds: (10..17).chain(19..26).collect(),
            blank_slot: Some(22),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            show_slot_numbers: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed minimum level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let size = Rows::from_slots(self.graphic.size)
            .with_context(|| format!("Invalid graphic size {}", self.graphic.size))?
            .slots();

        let pagination = &self.pagination;
        let named = [("previous_slot", pagination.previous_slot), ("next_slot", pagination.next_slot)];
        for (name, slot) in named {
            if slot >= size {
                anyhow::bail!("{} must be below the grid size {}, got {}", name, size, slot);
            }
        }

        if let Some(slot) = pagination.bounds.iter().find(|&&slot| slot >= size) {
            anyhow::bail!("bounds must lie inside the grid size {}, got slot {}", size, slot);
        }

        if let Some(slot) = pagination.blank_slot {
            if slot >= size {
                anyhow::bail!("blank_slot must be below the grid size {}, got {}", size, slot);
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# slotgrid Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
