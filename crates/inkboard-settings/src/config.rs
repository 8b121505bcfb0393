//! Configuration and settings management for Inkboard
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (edit lock, initial tool, id strategy)
//! - Grid settings (spacing, visibility)
//! - Default shape style

use inkboard_core::{Error, Result, ShapeStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Names accepted for `editor.default_tool`.
pub const TOOL_NAMES: [&str; 6] = ["line", "arrow", "rectangle", "ellipse", "triangle", "draw"];

/// How new shape identifiers are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4 strings
    #[default]
    Uuid,
    /// `shape1`, `shape2`, ... for reproducible documents
    Sequential,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid => write!(f, "uuid"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

/// Editor behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Reject every document mutation
    pub read_only: bool,
    /// Tool selected on startup
    pub default_tool: String,
    /// Identifier generation strategy
    pub id_strategy: IdStrategy,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            read_only: false,
            default_tool: "line".to_string(),
            id_strategy: IdStrategy::Uuid,
        }
    }
}

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid spacing in page units
    pub size: f64,
    /// Whether new pages start with the grid shown (and snapping on)
    pub show_grid: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 8.0,
            show_grid: false,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor behaviour
    pub editor: EditorSettings,
    /// Grid
    pub grid: GridSettings,
    /// Style applied to newly created shapes
    pub style: ShapeStyle,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.grid.size.is_finite() || self.grid.size <= 0.0 {
            return Err(Error::config(format!(
                "Grid size must be a positive number, got {}",
                self.grid.size
            )));
        }

        if !self.style.scale.is_finite() || self.style.scale <= 0.0 {
            return Err(Error::config(format!(
                "Style scale must be a positive number, got {}",
                self.style.scale
            )));
        }

        if !TOOL_NAMES.contains(&self.editor.default_tool.as_str()) {
            return Err(Error::config(format!(
                "Unknown default tool '{}'",
                self.editor.default_tool
            )));
        }

        Ok(())
    }

    /// Load config from `path`, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

/// Platform config directory for Inkboard (`~/.config/inkboard` on Linux)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("inkboard"))
}

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
