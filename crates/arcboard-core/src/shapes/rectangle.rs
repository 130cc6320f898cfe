//! Box shape.

use super::{ElementId, ShapeTrait};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A labelled rectangular node that arrows can connect to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxNode {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
    /// Label drawn in the middle of the box.
    #[serde(default)]
    pub label: String,
    /// Stroke color (hex).
    pub color: String,
}

impl BoxNode {
    /// Smallest width a box can be resized to.
    pub const MIN_WIDTH: f64 = 60.0;
    /// Smallest height a box can be resized to.
    pub const MIN_HEIGHT: f64 = 30.0;

    /// Create a new box. The id is assigned when it is added to a document.
    pub fn new(position: Point, width: f64, height: f64, color: impl Into<String>) -> Self {
        Self {
            id: ElementId::default(),
            position,
            width,
            height,
            label: String::new(),
            color: color.into(),
        }
    }

    /// Create a box from a normalized rectangle.
    pub fn from_rect(rect: Rect, color: impl Into<String>) -> Self {
        let rect = rect.abs();
        Self::new(rect.origin(), rect.width(), rect.height(), color)
    }

    /// Get the box as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Size after a resize gesture, clamped to the minimum box size.
    pub fn clamped_size(width: f64, height: f64) -> Size {
        Size::new(width.max(Self::MIN_WIDTH), height.max(Self::MIN_HEIGHT))
    }
}

impl ShapeTrait for BoxNode {
    fn id(&self) -> &ElementId {
        &self.id
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_creation() {
        let node = BoxNode::new(Point::new(10.0, 20.0), 100.0, 50.0, "#4ECDC4");
        assert!((node.position.x - 10.0).abs() < f64::EPSILON);
        assert!((node.position.y - 20.0).abs() < f64::EPSILON);
        assert!((node.width - 100.0).abs() < f64::EPSILON);
        assert!((node.height - 50.0).abs() < f64::EPSILON);
        assert!(node.label.is_empty());
        assert!(node.id().is_unassigned());
    }

    #[test]
    fn test_box_from_inverted_rect() {
        let node = BoxNode::from_rect(Rect::new(100.0, 100.0, 50.0, 60.0), "#000000");
        assert!((node.position.x - 50.0).abs() < f64::EPSILON);
        assert!((node.position.y - 60.0).abs() < f64::EPSILON);
        assert!((node.width - 50.0).abs() < f64::EPSILON);
        assert!((node.height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_is_inclusive() {
        let node = BoxNode::new(Point::new(0.0, 0.0), 100.0, 50.0, "#000000");
        assert!(node.hit_test(Point::new(50.0, 25.0)));
        assert!(node.hit_test(Point::new(100.0, 50.0)));
        assert!(node.hit_test(Point::new(0.0, 0.0)));
        assert!(!node.hit_test(Point::new(100.1, 25.0)));
    }

    #[test]
    fn test_clamped_size() {
        let size = BoxNode::clamped_size(10.0, 200.0);
        assert_eq!(size, Size::new(60.0, 200.0));
        let size = BoxNode::clamped_size(80.0, -5.0);
        assert_eq!(size, Size::new(80.0, 30.0));
    }

    #[test]
    fn test_bounds() {
        let node = BoxNode::new(Point::new(10.0, 20.0), 100.0, 50.0, "#000000");
        let bounds = node.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
