//! Shape styling shared by the editor, its settings and the document.

use serde::{Deserialize, Serialize};

/// Stroke and fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorStyle {
    White,
    LightGray,
    Gray,
    #[default]
    Black,
    Green,
    Cyan,
    Blue,
    Indigo,
    Violet,
    Red,
    Orange,
    Yellow,
}

impl std::fmt::Display for ColorStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::White => "white",
            Self::LightGray => "lightgray",
            Self::Gray => "gray",
            Self::Black => "black",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// Stroke width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeStyle {
    #[default]
    Small,
    Medium,
    Large,
}

/// Stroke dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    #[default]
    Draw,
    Solid,
    Dashed,
    Dotted,
}

/// Complete style record carried by every shape.
///
/// Shapes own their style; cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    pub color: ColorStyle,
    pub size: SizeStyle,
    pub dash: DashStyle,
    pub is_filled: bool,
    pub scale: f64,
}

impl ShapeStyle {
    /// Returns this style with a different colour.
    pub fn with_color(mut self, color: ColorStyle) -> Self {
        self.color = color;
        self
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: ColorStyle::Black,
            size: SizeStyle::Small,
            dash: DashStyle::Draw,
            is_filled: false,
            scale: 1.0,
        }
    }
}
