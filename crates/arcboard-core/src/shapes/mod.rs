//! Shape definitions for the diagram canvas.

mod arrow;
mod rectangle;
mod text;

pub use arrow::{Arrow, ArrowPatch};
pub use rectangle::BoxNode;
pub use text::TextNode;

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for shapes and arrows.
///
/// Ids are handed out by [`CanvasDocument`](crate::canvas::CanvasDocument) as
/// `el-1`, `el-2`, ... and are never reused until the document is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Prefix shared by every generated id.
    pub const PREFIX: &'static str = "el-";

    /// Build the id for the given counter value.
    pub fn from_counter(n: u64) -> Self {
        Self(format!("{}{}", Self::PREFIX, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Counter value encoded in this id, if it was generated by a document.
    pub fn counter(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    /// An id that has not been assigned by a document yet.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind tag of a shape, as written to the export artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Text,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Text => "text",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all canvas shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> &ElementId;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in canvas coordinates) hits this shape.
    fn hit_test(&self, point: Point) -> bool {
        crate::geometry::point_in_box(point, self.bounds())
    }

    /// Free-text label.
    fn label(&self) -> &str;

    fn set_label(&mut self, label: String);

    /// Color token (hex string).
    fn color(&self) -> &str;

    fn set_color(&mut self, color: String);

    /// Move the top-left corner.
    fn set_position(&mut self, position: Point);

    /// Set width and height.
    fn set_size(&mut self, size: Size);
}

/// Partial update merged into a shape by
/// [`CanvasDocument::update_shape`](crate::canvas::CanvasDocument::update_shape).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePatch {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub label: Option<String>,
    pub color: Option<String>,
}

impl ShapePatch {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..Default::default()
        }
    }
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box(BoxNode),
    Text(TextNode),
}

impl Shape {
    pub fn id(&self) -> &ElementId {
        match self {
            Shape::Box(s) => s.id(),
            Shape::Text(s) => s.id(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box(_) => ShapeKind::Box,
            Shape::Text(_) => ShapeKind::Text,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Box(s) => s.bounds(),
            Shape::Text(s) => s.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Shape::Box(s) => s.hit_test(point),
            Shape::Text(s) => s.hit_test(point),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Shape::Box(s) => s.label(),
            Shape::Text(s) => s.label(),
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Shape::Box(s) => s.color(),
            Shape::Text(s) => s.color(),
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        self.bounds().origin()
    }

    pub fn size(&self) -> Size {
        self.bounds().size()
    }

    /// Check if this shape is a box.
    pub fn is_box(&self) -> bool {
        matches!(self, Shape::Box(_))
    }

    /// Get the box if this shape is a box.
    pub fn as_box(&self) -> Option<&BoxNode> {
        match self {
            Shape::Box(b) => Some(b),
            _ => None,
        }
    }

    /// Merge the fields present in `patch` into this shape.
    pub fn apply(&mut self, patch: ShapePatch) {
        let target: &mut dyn ShapeTrait = match self {
            Shape::Box(s) => s,
            Shape::Text(s) => s,
        };
        if let Some(position) = patch.position {
            target.set_position(position);
        }
        if let Some(size) = patch.size {
            target.set_size(size);
        }
        if let Some(label) = patch.label {
            target.set_label(label);
        }
        if let Some(color) = patch.color {
            target.set_color(color);
        }
    }

    /// Assign the document-generated id.
    pub(crate) fn assign_id(&mut self, id: ElementId) {
        match self {
            Shape::Box(s) => s.id = id,
            Shape::Text(s) => s.id = id,
        }
    }
}

impl From<BoxNode> for Shape {
    fn from(node: BoxNode) -> Self {
        Shape::Box(node)
    }
}

impl From<TextNode> for Shape {
    fn from(node: TextNode) -> Self {
        Shape::Text(node)
    }
}
