//! Editor state: the document plus the active creation tool.
//!
//! Routes raw pointer input to the tool and the running session, and feeds
//! session completion back to the tool.

use crate::document::Document;
use crate::host::ToolHost;
use crate::tools::{CreationTool, PointerButton, PointerEvent, ShapeTool, ToolStatus};
use inkboard_core::{IdGenerator, Point, Result, SequentialIdGenerator, UuidIdGenerator};
use inkboard_settings::{EditorConfig, IdStrategy};

#[derive(Debug)]
pub struct Editor {
    pub document: Document,
    tool: CreationTool,
}

impl Editor {
    /// Creates an editor from configuration.
    pub fn new(config: &EditorConfig) -> Result<Self> {
        config.validate()?;
        let shape_tool: ShapeTool = config.editor.default_tool.parse()?;
        Ok(Self {
            document: Document::new(config),
            tool: CreationTool::new(shape_tool, id_generator(config.editor.id_strategy)),
        })
    }

    pub fn tool(&self) -> &CreationTool {
        &self.tool
    }

    pub fn status(&self) -> ToolStatus {
        self.tool.status()
    }

    /// Switches tools, cancelling any creation in progress.
    pub fn select_tool(&mut self, shape_tool: ShapeTool) -> Result<()> {
        if shape_tool == self.tool.shape_tool() {
            return Ok(());
        }
        self.tool.on_cancel(&mut self.document)?;
        self.tool.set_shape_tool(shape_tool);
        tracing::info!("Selected {} tool", shape_tool);
        Ok(())
    }

    pub fn pointer_down(&mut self, point: Point, button: PointerButton) -> Result<()> {
        self.document.set_pointer(point);
        self.tool
            .on_pointer_down(&mut self.document, &PointerEvent::new(button))
    }

    /// Moves the pointer, dragging the running session if there is one.
    pub fn pointer_move(&mut self, point: Point) -> Result<()> {
        self.document.set_pointer(point);
        if self.document.session().is_some() {
            self.document.update_session(point)?;
        }
        Ok(())
    }

    /// Releases the pointer, completing the running session.
    pub fn pointer_up(&mut self) -> Result<()> {
        if self.document.session().is_some() {
            self.document.complete_session()?;
            self.tool.on_session_complete();
        }
        Ok(())
    }

    /// Cancels the creation in progress.
    pub fn cancel(&mut self) -> Result<()> {
        self.tool.on_cancel(&mut self.document)
    }

    pub fn undo(&mut self) -> Result<bool> {
        self.document.undo()
    }

    pub fn redo(&mut self) -> Result<bool> {
        self.document.redo()
    }

    pub fn is_read_only(&self) -> bool {
        self.document.read_only()
    }
}

fn id_generator(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Uuid => Box::new(UuidIdGenerator),
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::default()),
    }
}
