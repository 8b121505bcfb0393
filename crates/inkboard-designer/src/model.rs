//! Shape records stored in a document.
//!
//! A [`Shape`] carries the fields every shape shares (identity, parent,
//! ordering key, anchor point, style) and a [`ShapeKind`] holding the
//! geometry specific to its type. Geometry is expressed relative to the
//! shape's anchor point.

use inkboard_core::{PageId, Point, ShapeId, ShapeStyle};
use serde::{Deserialize, Serialize};

/// Shape type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Line,
    Arrow,
    Rectangle,
    Ellipse,
    Triangle,
    Draw,
}

/// Marker drawn at one end of a linear shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    Arrow,
}

/// End markers of a linear shape. `None` means a plain end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Decorations {
    pub start: Option<Decoration>,
    pub end: Option<Decoration>,
}

/// Control points of a linear shape, relative to the shape's point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearHandles {
    pub start: Point,
    pub end: Point,
}

impl Default for LinearHandles {
    fn default() -> Self {
        Self {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
        }
    }
}

/// Geometry shared by lines and arrows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearGeometry {
    pub handles: LinearHandles,
    pub decorations: Decorations,
}

/// Type-specific geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeKind {
    Line(LinearGeometry),
    Arrow(LinearGeometry),
    Rectangle { size: Point },
    Ellipse { radius: Point },
    Triangle { size: Point },
    Draw { points: Vec<Point> },
}

impl ShapeKind {
    /// Returns the type tag of this geometry.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ShapeKind::Line(_) => ShapeType::Line,
            ShapeKind::Arrow(_) => ShapeType::Arrow,
            ShapeKind::Rectangle { .. } => ShapeType::Rectangle,
            ShapeKind::Ellipse { .. } => ShapeType::Ellipse,
            ShapeKind::Triangle { .. } => ShapeType::Triangle,
            ShapeKind::Draw { .. } => ShapeType::Draw,
        }
    }

    /// Linear geometry of a line or arrow.
    pub fn linear(&self) -> Option<&LinearGeometry> {
        match self {
            ShapeKind::Line(geometry) | ShapeKind::Arrow(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub(crate) fn linear_mut(&mut self) -> Option<&mut LinearGeometry> {
        match self {
            ShapeKind::Line(geometry) | ShapeKind::Arrow(geometry) => Some(geometry),
            _ => None,
        }
    }
}

/// A drawable document entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub parent_id: PageId,
    /// Sibling ordering key; higher values are drawn above lower ones.
    pub child_index: f64,
    pub point: Point,
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub kind: ShapeKind,
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)` in page coordinates.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let local: Vec<Point> = match &self.kind {
            ShapeKind::Line(g) | ShapeKind::Arrow(g) => vec![g.handles.start, g.handles.end],
            ShapeKind::Rectangle { size } | ShapeKind::Triangle { size } => {
                vec![Point::new(0.0, 0.0), *size]
            }
            ShapeKind::Ellipse { radius } => {
                vec![Point::new(0.0, 0.0), Point::new(radius.x * 2.0, radius.y * 2.0)]
            }
            ShapeKind::Draw { points } => points.clone(),
        };

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in local.iter().map(|p| p.add(self.point)) {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        if local.is_empty() {
            (self.point.x, self.point.y, self.point.x, self.point.y)
        } else {
            (min_x, min_y, max_x, max_y)
        }
    }
}
