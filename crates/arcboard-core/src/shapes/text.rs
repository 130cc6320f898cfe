//! Free-floating text label.

use super::{ElementId, ShapeTrait};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A text label placed directly on the canvas.
///
/// Text nodes keep their stored size even while the label is empty, so a
/// freshly placed label can still be hit, dragged and connected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub(crate) id: ElementId,
    /// Position (top-left corner of the text bounding box).
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// The text content.
    #[serde(default)]
    pub label: String,
    /// Text color (hex).
    pub color: String,
}

impl TextNode {
    /// Size given to a text node when it is placed.
    pub const DEFAULT_SIZE: Size = Size::new(120.0, 32.0);

    /// Create a new, empty text node with the default size.
    pub fn new(position: Point, color: impl Into<String>) -> Self {
        Self {
            id: ElementId::default(),
            position,
            width: Self::DEFAULT_SIZE.width,
            height: Self::DEFAULT_SIZE.height,
            label: String::new(),
            color: color.into(),
        }
    }

    /// Create a text node whose default-sized box is centered on `center`.
    pub fn centered_at(center: Point, color: impl Into<String>) -> Self {
        let origin = Point::new(
            center.x - Self::DEFAULT_SIZE.width / 2.0,
            center.y - Self::DEFAULT_SIZE.height / 2.0,
        );
        Self::new(origin, color)
    }

    /// Check whether the label has any visible content.
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}

impl ShapeTrait for TextNode {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, Size::new(self.width, self.height))
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn set_color(&mut self, color: String) {
        self.color = color;
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }
}
