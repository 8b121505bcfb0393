//! Single-click shape creation.

use super::{PointerEvent, ShapeTool, ToolStatus};
use crate::host::ToolHost;
use crate::model::Shape;
use inkboard_core::{Error, IdGenerator, Result, SessionError, UuidIdGenerator};

/// Creates a shape on primary pointer-down and hands it to an edit session.
///
/// One state machine serves every [`ShapeTool`]:
///
/// ```text
/// Idle --pointer down--> Creating --session complete / cancel--> Idle
/// ```
pub struct CreationTool {
    tool: ShapeTool,
    status: ToolStatus,
    ids: Box<dyn IdGenerator>,
}

impl CreationTool {
    pub fn new(tool: ShapeTool, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            tool,
            status: ToolStatus::Idle,
            ids,
        }
    }

    /// Creates a tool issuing UUID v4 shape ids.
    pub fn with_uuid_ids(tool: ShapeTool) -> Self {
        Self::new(tool, Box::new(UuidIdGenerator))
    }

    pub fn shape_tool(&self) -> ShapeTool {
        self.tool
    }

    pub fn status(&self) -> ToolStatus {
        self.status
    }

    /// Changes the shape drawn by later pointer-downs. Ids keep coming from
    /// the same generator.
    pub fn set_shape_tool(&mut self, tool: ShapeTool) {
        self.set_status(ToolStatus::Idle);
        self.tool = tool;
    }

    fn set_status(&mut self, status: ToolStatus) {
        if self.status != status {
            tracing::debug!("{} tool: {} -> {}", self.tool, self.status, status);
            self.status = status;
        }
    }

    /// Creates a shape at the pointer and starts its creation session.
    ///
    /// Ignored when the button is not primary, the host is read-only, or the
    /// tool is not idle. Errors from the host are returned unchanged and
    /// leave the tool idle.
    pub fn on_pointer_down<H>(&mut self, host: &mut H, event: &PointerEvent) -> Result<()>
    where
        H: ToolHost + ?Sized,
    {
        if !event.is_primary() {
            tracing::debug!("{} tool: ignoring {:?} button", self.tool, event.button);
            return Ok(());
        }
        if host.read_only() {
            tracing::debug!("{} tool: document is read-only", self.tool);
            return Ok(());
        }
        if self.status != ToolStatus::Idle {
            tracing::debug!("{} tool: busy ({})", self.tool, self.status);
            return Ok(());
        }

        let shape = self.build_shape(host);
        let shape_id = shape.id.clone();
        tracing::info!(
            "{} tool: creating {} at ({}, {}) on {}",
            self.tool,
            shape_id,
            shape.point.x,
            shape.point.y,
            shape.parent_id
        );

        host.patch_create(vec![shape])?;
        host.start_session(
            self.tool.session_type(),
            &shape_id,
            self.tool.primary_handle(),
            true,
        )?;

        self.set_status(ToolStatus::Creating);
        Ok(())
    }

    fn build_shape<H>(&mut self, host: &H) -> Shape
    where
        H: ToolHost + ?Sized,
    {
        let page_id = host.current_page_id();
        let current_point = host.current_point();
        let point = if host.is_showing_grid(&page_id) {
            host.closest_grid_snap(&page_id, current_point)
        } else {
            current_point
        };

        Shape {
            id: self.ids.next_id(),
            child_index: host.next_child_index(),
            parent_id: page_id,
            point,
            style: host.current_style().clone(),
            kind: self.tool.default_kind(),
        }
    }

    /// The host finished the creation session.
    pub fn on_session_complete(&mut self) {
        self.set_status(ToolStatus::Idle);
    }

    /// The host aborted the creation session.
    pub fn on_session_cancel(&mut self) {
        self.set_status(ToolStatus::Idle);
    }

    /// User cancel: aborts the running creation session, if any.
    ///
    /// The tool is idle afterwards even when the host fails. A host whose
    /// session already ended counts as cancelled.
    pub fn on_cancel<H>(&mut self, host: &mut H) -> Result<()>
    where
        H: ToolHost + ?Sized,
    {
        if self.status == ToolStatus::Idle {
            return Ok(());
        }
        self.set_status(ToolStatus::Idle);
        match host.cancel_session() {
            Err(Error::Session(SessionError::NoActiveSession)) => {
                tracing::debug!("{} tool: session already ended", self.tool);
                Ok(())
            }
            result => result,
        }
    }
}

impl std::fmt::Debug for CreationTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreationTool")
            .field("tool", &self.tool)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
