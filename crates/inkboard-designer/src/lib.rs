//! # Inkboard Designer
//!
//! Pointer-driven shape creation for the Inkboard editor.
//!
//! ## Core Components
//!
//! - **Model**: shape records with type-specific geometry
//! - **Tools**: one creation state machine driving a table of shape tools
//!   (line, arrow, rectangle, ellipse, triangle, freehand)
//! - **Host**: the narrow capability trait tools act through
//! - **Document**: in-memory host with pages, edit sessions and undo/redo
//! - **Editor**: routes pointer input between the tool and the document
//!
//! ## Architecture
//!
//! ```text
//! Editor
//!   ├── CreationTool (Idle -> Creating -> Idle)
//!   │     └── ShapeTool (default geometry, session type, handle)
//!   └── Document (implements ToolHost)
//!         ├── Pages -> Shapes
//!         ├── Session (running interactive edit)
//!         └── History (undo/redo)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inkboard_designer::{Editor, PointerButton};
//!
//! let mut editor = Editor::new(&EditorConfig::default())?;
//! editor.pointer_down(Point::new(10.0, 10.0), PointerButton::Primary)?;
//! editor.pointer_move(Point::new(60.0, 40.0))?;
//! editor.pointer_up()?;
//! ```

pub mod commands;
pub mod document;
pub mod editor;
pub mod host;
pub mod model;
pub mod session;
pub mod tools;

pub use commands::{CreateShapes, DocumentCommand};
pub use document::{Document, Page};
pub use editor::Editor;
pub use host::ToolHost;
pub use model::{
    Decoration, Decorations, LinearGeometry, LinearHandles, Shape, ShapeKind, ShapeType,
};
pub use session::{Handle, Session, SessionType};
pub use tools::{CreationTool, PointerButton, PointerEvent, ShapeTool, ToolStatus};
