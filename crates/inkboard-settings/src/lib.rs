//! Inkboard Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;

pub use config::{
    config_dir, default_config_path, EditorConfig, EditorSettings, GridSettings, IdStrategy,
    TOOL_NAMES,
};
