//! In-memory document: pages of shapes, the running session and undo history.
//!
//! [`Document`] implements [`ToolHost`], so creation tools can be driven
//! against it directly.

use crate::commands::{CreateShapes, DocumentCommand};
use crate::host::ToolHost;
use crate::model::{Shape, ShapeKind};
use crate::session::{Handle, Session, SessionType};
use inkboard_core::{
    DocumentError, PageId, Point, Result, SessionError, ShapeId, ShapeStyle,
};
use inkboard_settings::EditorConfig;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// A page and the shapes on it.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub show_grid: bool,
    pub shapes: BTreeMap<ShapeId, Shape>,
}

impl Page {
    pub fn new(id: PageId, name: impl Into<String>, show_grid: bool) -> Self {
        Self {
            id,
            name: name.into(),
            show_grid,
            shapes: BTreeMap::new(),
        }
    }

    /// Shapes in drawing order.
    pub fn sorted_shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by(|a, b| a.child_index.total_cmp(&b.child_index));
        shapes
    }
}

/// Editor document state.
#[derive(Debug, Clone)]
pub struct Document {
    pages: BTreeMap<PageId, Page>,
    current_page_id: PageId,
    current_point: Point,
    current_style: ShapeStyle,
    read_only: bool,
    grid_size: f64,
    show_grid_default: bool,
    session: Option<Session>,
    pub(crate) undo_stack: Vec<DocumentCommand>,
    pub(crate) redo_stack: Vec<DocumentCommand>,
    /// Redo history set aside by a create, until its creating session ends.
    held_redo: Vec<DocumentCommand>,
}

impl Document {
    /// Creates a document with a single empty page `"page"`.
    pub fn new(config: &EditorConfig) -> Self {
        let page_id = PageId::new("page");
        let mut pages = BTreeMap::new();
        pages.insert(
            page_id.clone(),
            Page::new(page_id.clone(), "Page 1", config.grid.show_grid),
        );

        Self {
            pages,
            current_page_id: page_id,
            current_point: Point::default(),
            current_style: config.style.clone(),
            read_only: config.editor.read_only,
            grid_size: config.grid.size,
            show_grid_default: config.grid.show_grid,
            session: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            held_redo: Vec::new(),
        }
    }

    pub fn pages(&self) -> &BTreeMap<PageId, Page> {
        &self.pages
    }

    pub fn page(&self, page_id: &PageId) -> Option<&Page> {
        self.pages.get(page_id)
    }

    /// Adds an empty page. Returns `false` if the id is taken.
    pub fn add_page(&mut self, page_id: impl Into<PageId>, name: impl Into<String>) -> bool {
        let page_id = page_id.into();
        if self.pages.contains_key(&page_id) {
            return false;
        }
        let page = Page::new(page_id.clone(), name, self.show_grid_default);
        self.pages.insert(page_id, page);
        true
    }

    pub fn set_current_page(&mut self, page_id: impl Into<PageId>) -> Result<()> {
        let page_id = page_id.into();
        if !self.pages.contains_key(&page_id) {
            return Err(DocumentError::PageNotFound {
                page_id: page_id.to_string(),
            }
            .into());
        }
        self.current_page_id = page_id;
        Ok(())
    }

    /// Records the pointer position in page coordinates.
    pub fn set_pointer(&mut self, point: Point) {
        self.current_point = point;
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.current_style = style;
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.current_style
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn set_grid_visible(&mut self, page_id: &PageId, visible: bool) -> Result<()> {
        let page = self.page_mut(page_id)?;
        page.show_grid = visible;
        Ok(())
    }

    /// Shapes on the current page in drawing order.
    pub fn current_shapes(&self) -> Vec<&Shape> {
        self.pages
            .get(&self.current_page_id)
            .map(Page::sorted_shapes)
            .unwrap_or_default()
    }

    /// Finds a shape on any page.
    pub fn shape(&self, shape_id: &ShapeId) -> Option<&Shape> {
        self.pages.values().find_map(|page| page.shapes.get(shape_id))
    }

    /// Number of shapes across all pages.
    pub fn shape_count(&self) -> usize {
        self.pages.values().map(|page| page.shapes.len()).sum()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Reverts the latest command. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        self.ensure_writable()?;
        self.ensure_no_session()?;
        self.held_redo.clear();
        let Some(mut cmd) = self.undo_stack.pop() else {
            return Ok(false);
        };
        tracing::debug!("Undo: {}", cmd.name());
        cmd.undo(self);
        self.redo_stack.push(cmd);
        Ok(true)
    }

    /// Re-applies the latest undone command. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        self.ensure_writable()?;
        self.ensure_no_session()?;
        self.held_redo.clear();
        let Some(mut cmd) = self.redo_stack.pop() else {
            return Ok(false);
        };
        tracing::debug!("Redo: {}", cmd.name());
        cmd.apply(self);
        self.undo_stack.push(cmd);
        Ok(true)
    }

    /// Drags the running session's handle to `point`.
    pub fn update_session(&mut self, point: Point) -> Result<()> {
        self.ensure_writable()?;
        let session = self.session.clone().ok_or(SessionError::NoActiveSession)?;
        let shape = self.shape_mut(&session.shape_id)?;
        let delta = point.sub(shape.point);

        match (session.session_type, &mut shape.kind) {
            (SessionType::Arrow, kind) => {
                if let Some(geometry) = kind.linear_mut() {
                    match session.handle {
                        Some(Handle::Start) => geometry.handles.start = delta,
                        Some(Handle::End) => geometry.handles.end = delta,
                        _ => {}
                    }
                }
            }
            (SessionType::TransformSingle, ShapeKind::Rectangle { size })
            | (SessionType::TransformSingle, ShapeKind::Triangle { size }) => {
                *size = Point::new(delta.x.max(1.0), delta.y.max(1.0));
            }
            (SessionType::TransformSingle, ShapeKind::Ellipse { radius }) => {
                *radius = Point::new((delta.x / 2.0).max(1.0), (delta.y / 2.0).max(1.0));
            }
            (SessionType::Draw, ShapeKind::Draw { points }) => points.push(delta),
            (session_type, kind) => {
                tracing::warn!(
                    "{:?} session cannot edit a {:?} shape",
                    session_type,
                    kind.shape_type()
                );
            }
        }
        Ok(())
    }

    /// Ends the running session, keeping its edits.
    pub fn complete_session(&mut self) -> Result<Session> {
        let session = self.session.take().ok_or(SessionError::NoActiveSession)?;
        self.held_redo.clear();
        tracing::info!(
            "Completed {:?} session on {}",
            session.session_type,
            session.shape_id
        );
        Ok(session)
    }

    fn ensure_no_session(&self) -> Result<()> {
        match &self.session {
            Some(session) => Err(SessionError::SessionActive {
                shape_id: session.shape_id.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(DocumentError::ReadOnly.into());
        }
        Ok(())
    }

    fn page_mut(&mut self, page_id: &PageId) -> Result<&mut Page> {
        self.pages.get_mut(page_id).ok_or_else(|| {
            DocumentError::PageNotFound {
                page_id: page_id.to_string(),
            }
            .into()
        })
    }

    fn shape_mut(&mut self, shape_id: &ShapeId) -> Result<&mut Shape> {
        self.pages
            .values_mut()
            .find_map(|page| page.shapes.get_mut(shape_id))
            .ok_or_else(|| {
                DocumentError::ShapeNotFound {
                    shape_id: shape_id.to_string(),
                }
                .into()
            })
    }

    pub(crate) fn restore_shape(&mut self, shape: Shape) {
        if let Some(page) = self.pages.get_mut(&shape.parent_id) {
            page.shapes.insert(shape.id.clone(), shape);
        }
    }

    pub(crate) fn remove_shape_return(&mut self, shape_id: &ShapeId) -> Option<Shape> {
        self.pages
            .values_mut()
            .find_map(|page| page.shapes.remove(shape_id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl ToolHost for Document {
    fn read_only(&self) -> bool {
        self.read_only
    }

    fn current_point(&self) -> Point {
        self.current_point
    }

    fn current_page_id(&self) -> PageId {
        self.current_page_id.clone()
    }

    fn current_style(&self) -> &ShapeStyle {
        &self.current_style
    }

    fn is_showing_grid(&self, page_id: &PageId) -> bool {
        self.pages.get(page_id).is_some_and(|page| page.show_grid)
    }

    fn closest_grid_snap(&self, _page_id: &PageId, point: Point) -> Point {
        point.snap(self.grid_size)
    }

    fn next_child_index(&self) -> f64 {
        self.current_shapes()
            .last()
            .map_or(1.0, |shape| shape.child_index + 1.0)
    }

    fn patch_create(&mut self, shapes: Vec<Shape>) -> Result<()> {
        self.ensure_writable()?;
        if shapes.is_empty() {
            return Ok(());
        }

        let mut batch: HashSet<&ShapeId> = HashSet::new();
        for shape in &shapes {
            if !self.pages.contains_key(&shape.parent_id) {
                return Err(DocumentError::PageNotFound {
                    page_id: shape.parent_id.to_string(),
                }
                .into());
            }
            if self.shape(&shape.id).is_some() || !batch.insert(&shape.id) {
                return Err(DocumentError::DuplicateShape {
                    shape_id: shape.id.to_string(),
                }
                .into());
            }
        }
        drop(batch);

        let ids: Vec<ShapeId> = shapes.iter().map(|shape| shape.id.clone()).collect();
        for shape in shapes {
            self.restore_shape(shape);
        }
        tracing::debug!("Created {} shape(s)", ids.len());

        self.undo_stack
            .push(DocumentCommand::CreateShapes(CreateShapes::new(ids)));
        self.held_redo = std::mem::take(&mut self.redo_stack);
        Ok(())
    }

    fn start_session(
        &mut self,
        session_type: SessionType,
        shape_id: &ShapeId,
        handle: Option<Handle>,
        is_creating: bool,
    ) -> Result<()> {
        self.ensure_writable()?;
        self.ensure_no_session()?;
        if self.shape(shape_id).is_none() {
            return Err(DocumentError::ShapeNotFound {
                shape_id: shape_id.to_string(),
            }
            .into());
        }

        tracing::debug!(
            "Starting {:?} session on {} (handle: {}, creating: {})",
            session_type,
            shape_id,
            handle.map_or("none", |h| h.as_str()),
            is_creating
        );
        self.session = Some(Session {
            session_type,
            shape_id: shape_id.clone(),
            handle,
            is_creating,
        });
        Ok(())
    }

    /// Ends the running session. A creating session also takes its shape
    /// and create entry back out, unless the document is read-only, in which
    /// case the shape is left as it is.
    fn cancel_session(&mut self) -> Result<()> {
        let session = self.session.take().ok_or(SessionError::NoActiveSession)?;
        tracing::info!(
            "Cancelled {:?} session on {}",
            session.session_type,
            session.shape_id
        );

        if !session.is_creating {
            return Ok(());
        }
        if self.read_only {
            tracing::warn!("Read-only: keeping {} after cancel", session.shape_id);
            self.held_redo.clear();
            return Ok(());
        }

        self.remove_shape_return(&session.shape_id);
        if let Some(pos) = self
            .undo_stack
            .iter()
            .rposition(|cmd| cmd.creates(&session.shape_id))
        {
            self.undo_stack.remove(pos);
            self.redo_stack = std::mem::take(&mut self.held_redo);
        }
        Ok(())
    }
}
