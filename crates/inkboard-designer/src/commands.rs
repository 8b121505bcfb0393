//! Undoable document commands.

use crate::document::Document;
use crate::model::Shape;
use inkboard_core::ShapeId;

#[derive(Debug, Clone)]
pub enum DocumentCommand {
    CreateShapes(CreateShapes),
}

/// Shapes added by one create patch.
#[derive(Debug, Clone)]
pub struct CreateShapes {
    pub ids: Vec<ShapeId>,
    /// `None` while the shapes are in the document, `Some` once undone.
    pub objects: Vec<Option<Shape>>,
}

impl CreateShapes {
    pub fn new(ids: Vec<ShapeId>) -> Self {
        let objects = vec![None; ids.len()];
        Self { ids, objects }
    }
}

impl DocumentCommand {
    pub fn apply(&mut self, document: &mut Document) {
        match self {
            DocumentCommand::CreateShapes(cmd) => {
                for object in &mut cmd.objects {
                    if let Some(shape) = object.take() {
                        document.restore_shape(shape);
                    }
                }
            }
        }
    }

    pub fn undo(&mut self, document: &mut Document) {
        match self {
            DocumentCommand::CreateShapes(cmd) => {
                for (i, id) in cmd.ids.iter().enumerate() {
                    if let Some(shape) = document.remove_shape_return(id) {
                        cmd.objects[i] = Some(shape);
                    }
                }
            }
        }
    }

    /// Whether this command created `id`.
    pub fn creates(&self, id: &ShapeId) -> bool {
        match self {
            DocumentCommand::CreateShapes(cmd) => cmd.ids.contains(id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DocumentCommand::CreateShapes(_) => "Create Shapes",
        }
    }
}
