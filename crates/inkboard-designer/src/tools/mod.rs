//! Pointer-driven drawing tools.

mod creation;
mod shape_tool;

pub use creation::CreationTool;
pub use shape_tool::ShapeTool;

/// Whether a tool accepts new pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolStatus {
    #[default]
    Idle,
    /// A shape was created and its session is running.
    Creating,
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolStatus::Idle => write!(f, "idle"),
            ToolStatus::Creating => write!(f, "creating"),
        }
    }
}

/// Pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Pointer input delivered to a tool.
///
/// The pointer position itself is read from the host, which tracks it
/// across moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(button: PointerButton) -> Self {
        Self { button }
    }

    pub fn primary() -> Self {
        Self::new(PointerButton::Primary)
    }

    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}
