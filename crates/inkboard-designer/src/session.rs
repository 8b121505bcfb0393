//! Interactive edit sessions.
//!
//! A session is bound to one shape and, for handle-driven edits, one of its
//! control handles. Sessions are owned by the document host; tools only ask
//! for one to be started.

use inkboard_core::ShapeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of interactive edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// Drags a handle of a line or arrow.
    Arrow,
    /// Resizes a single shape by one of its corners.
    TransformSingle,
    /// Appends points to a freehand stroke.
    Draw,
}

/// Control handle a session manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    Start,
    End,
    BottomRight,
}

impl Handle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::Start => "start",
            Handle::End => "end",
            Handle::BottomRight => "bottom_right",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A running interactive edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub session_type: SessionType,
    pub shape_id: ShapeId,
    pub handle: Option<Handle>,
    /// The shape was created for this session; cancelling deletes it.
    pub is_creating: bool,
}
