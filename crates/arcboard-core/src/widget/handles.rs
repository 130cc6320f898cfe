//! Manipulation handles.

use crate::geometry::{near_resize_handle, RESIZE_HANDLE_THRESHOLD};
use crate::shapes::Shape;
use kurbo::{Point, Rect};

/// Drawn radius of a handle.
pub const HANDLE_RADIUS: f64 = 6.0;

/// A manipulation handle on a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// The kind of handle (determines behavior).
    pub kind: HandleKind,
    /// Position in canvas coordinates.
    pub position: Point,
}

/// The kind of handle - determines what manipulation it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Bottom-right corner of a box; dragging it resizes the box.
    Resize,
}

impl Handle {
    /// Create a new handle.
    pub fn new(kind: HandleKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Area covered by the drawn handle.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, (HANDLE_RADIUS * 2.0, HANDLE_RADIUS * 2.0))
    }
}

/// Resize handle for a shape. Only boxes can be resized.
pub fn resize_handle(shape: &Shape) -> Option<Handle> {
    match shape {
        Shape::Box(b) => {
            let bounds = b.as_rect();
            Some(Handle::new(HandleKind::Resize, Point::new(bounds.x1, bounds.y1)))
        }
        Shape::Text(_) => None,
    }
}

/// Hit test the handles of a shape.
pub fn hit_test_handle(shape: &Shape, point: Point) -> Option<HandleKind> {
    let handle = resize_handle(shape)?;
    near_resize_handle(point, shape.bounds(), RESIZE_HANDLE_THRESHOLD).then_some(handle.kind)
}
