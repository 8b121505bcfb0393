//! Capabilities a tool needs from the application hosting it.

use crate::model::Shape;
use crate::session::{Handle, SessionType};
use inkboard_core::{PageId, Point, Result, ShapeId, ShapeStyle};

/// Narrow view of the editor that creation tools act through.
///
/// Tools never touch the document directly: they read ambient input state
/// and submit mutations through [`ToolHost::patch_create`] and
/// [`ToolHost::start_session`].
pub trait ToolHost {
    /// Global edit lock.
    fn read_only(&self) -> bool;

    /// Pointer position in page coordinates.
    fn current_point(&self) -> Point;

    fn current_page_id(&self) -> PageId;

    /// Style applied to new shapes.
    fn current_style(&self) -> &ShapeStyle;

    /// Whether the grid is shown (and snapping active) on `page_id`.
    fn is_showing_grid(&self, page_id: &PageId) -> bool;

    /// Nearest grid-aligned point to `point` on `page_id`.
    fn closest_grid_snap(&self, page_id: &PageId, point: Point) -> Point;

    /// Ordering key placing a new shape above every current sibling.
    fn next_child_index(&self) -> f64;

    /// Adds `shapes` to the document as one undoable operation.
    fn patch_create(&mut self, shapes: Vec<Shape>) -> Result<()>;

    /// Begins an interactive edit of `shape_id`.
    ///
    /// `is_creating` marks a shape created for this session, so cancelling
    /// removes it instead of reverting an edit.
    fn start_session(
        &mut self,
        session_type: SessionType,
        shape_id: &ShapeId,
        handle: Option<Handle>,
        is_creating: bool,
    ) -> Result<()>;

    /// Aborts the running session.
    fn cancel_session(&mut self) -> Result<()>;
}
