//! # Inkboard
//!
//! Pointer-driven vector shape creation:
//! - Single-click creation tools for lines, arrows, rectangles, ellipses,
//!   triangles and freehand strokes
//! - Optional grid snapping of the anchor point
//! - Interactive edit sessions that complete or cancel a new shape
//! - Undo/redo of created shapes
//!
//! ## Architecture
//!
//! Inkboard is organized as a workspace with multiple crates:
//!
//! 1. **inkboard-core** - Points, identifiers, styles, errors
//! 2. **inkboard-settings** - Editor configuration and persistence
//! 3. **inkboard-designer** - Shape model, creation tools, document host
//! 4. **inkboard** - Logging setup and the demo binary

use anyhow::Context;
use std::path::Path;

pub use inkboard_core::{
    ColorStyle, DocumentError, Error, PageId, Point, Result, SessionError, ShapeId, ShapeStyle,
};
pub use inkboard_designer::{
    CreationTool, Document, Editor, PointerButton, PointerEvent, Shape, ShapeKind, ShapeTool,
    ShapeType, ToolHost, ToolStatus,
};
pub use inkboard_settings::{default_config_path, EditorConfig, IdStrategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Loads the config at `path`, or the default location when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                tracing::warn!("No config directory on this platform, using defaults");
                return Ok(EditorConfig::default());
            }
        },
    };

    EditorConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Draws one shape with every tool, each dragged from its own start point,
/// then cancels one extra line to exercise the abort path.
pub fn run_demo(editor: &mut Editor) -> anyhow::Result<()> {
    for (i, tool) in ShapeTool::ALL.into_iter().enumerate() {
        let start = Point::new(20.0 + 60.0 * i as f64, 20.0);
        editor.select_tool(tool)?;
        editor.pointer_down(start, PointerButton::Primary)?;
        for step in 1..=4 {
            let t = step as f64 * 10.0;
            editor.pointer_move(Point::new(start.x + t, start.y + t * 0.75))?;
        }
        editor.pointer_up()?;
    }

    editor.select_tool(ShapeTool::Line)?;
    editor.pointer_down(Point::new(0.0, 200.0), PointerButton::Primary)?;
    editor.cancel()?;

    tracing::info!(
        "Demo finished with {} shapes",
        editor.document.shape_count()
    );
    Ok(())
}

/// Pretty JSON of every page and its shapes.
pub fn document_json(document: &Document) -> anyhow::Result<String> {
    serde_json::to_string_pretty(document.pages()).context("Failed to serialize document")
}
