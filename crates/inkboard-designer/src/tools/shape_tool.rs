//! Per-shape-type creation strategies.

use crate::model::{Decoration, Decorations, LinearGeometry, ShapeKind, ShapeType};
use crate::session::{Handle, SessionType};
use inkboard_core::{Error, Point};
use std::fmt;
use std::str::FromStr;

/// The shape a creation tool draws, and how its session is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeTool {
    Line,
    Arrow,
    Rectangle,
    Ellipse,
    Triangle,
    Draw,
}

impl ShapeTool {
    pub const ALL: [ShapeTool; 6] = [
        ShapeTool::Line,
        ShapeTool::Arrow,
        ShapeTool::Rectangle,
        ShapeTool::Ellipse,
        ShapeTool::Triangle,
        ShapeTool::Draw,
    ];

    pub fn shape_type(self) -> ShapeType {
        match self {
            ShapeTool::Line => ShapeType::Line,
            ShapeTool::Arrow => ShapeType::Arrow,
            ShapeTool::Rectangle => ShapeType::Rectangle,
            ShapeTool::Ellipse => ShapeType::Ellipse,
            ShapeTool::Triangle => ShapeType::Triangle,
            ShapeTool::Draw => ShapeType::Draw,
        }
    }

    /// Geometry of a freshly created shape.
    pub fn default_kind(self) -> ShapeKind {
        let unit = Point::new(1.0, 1.0);
        match self {
            ShapeTool::Line => ShapeKind::Line(LinearGeometry::default()),
            ShapeTool::Arrow => ShapeKind::Arrow(LinearGeometry {
                decorations: Decorations {
                    start: None,
                    end: Some(Decoration::Arrow),
                },
                ..LinearGeometry::default()
            }),
            ShapeTool::Rectangle => ShapeKind::Rectangle { size: unit },
            ShapeTool::Ellipse => ShapeKind::Ellipse { radius: unit },
            ShapeTool::Triangle => ShapeKind::Triangle { size: unit },
            ShapeTool::Draw => ShapeKind::Draw {
                points: vec![Point::new(0.0, 0.0)],
            },
        }
    }

    pub fn session_type(self) -> SessionType {
        match self {
            ShapeTool::Line | ShapeTool::Arrow => SessionType::Arrow,
            ShapeTool::Rectangle | ShapeTool::Ellipse | ShapeTool::Triangle => {
                SessionType::TransformSingle
            }
            ShapeTool::Draw => SessionType::Draw,
        }
    }

    /// Handle the creation session drags. Freehand strokes have none.
    pub fn primary_handle(self) -> Option<Handle> {
        match self {
            ShapeTool::Line | ShapeTool::Arrow => Some(Handle::End),
            ShapeTool::Rectangle | ShapeTool::Ellipse | ShapeTool::Triangle => {
                Some(Handle::BottomRight)
            }
            ShapeTool::Draw => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeTool::Line => "line",
            ShapeTool::Arrow => "arrow",
            ShapeTool::Rectangle => "rectangle",
            ShapeTool::Ellipse => "ellipse",
            ShapeTool::Triangle => "triangle",
            ShapeTool::Draw => "draw",
        }
    }
}

impl fmt::Display for ShapeTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeTool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeTool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::other(format!("Unknown tool '{}'", s)))
    }
}
