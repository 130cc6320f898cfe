//! Pure geometry helpers: coordinate mapping, hit testing and edge anchoring.
//!
//! Every function here tolerates degenerate boxes (zero or near-zero width
//! or height) and never panics; they are rendering artifacts, not errors.

use crate::input::PointerSample;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Stand-in for a zero horizontal delta when computing a ray slope.
pub const SLOPE_EPSILON: f64 = 1e-3;

/// Distance from a box's bottom-right corner that still grabs the resize handle.
pub const RESIZE_HANDLE_THRESHOLD: f64 = 14.0;

/// Length of the arrowhead sides.
pub const ARROW_HEAD_LENGTH: f64 = 12.0;

/// Half-angle of the arrowhead, in radians.
pub const ARROW_HEAD_SPREAD: f64 = 0.4;

/// Map a raw pointer sample to drawing-surface coordinates.
///
/// `surface_origin` is the top-left corner of the drawing surface in screen
/// space. Without a surface, or for a touch sample with no contact points,
/// the result falls back to the origin.
pub fn to_local_point(sample: &PointerSample, surface_origin: Option<Point>) -> Point {
    match (surface_origin, sample.primary()) {
        (Some(origin), Some(client)) => Point::new(client.x - origin.x, client.y - origin.y),
        _ => Point::ZERO,
    }
}

/// Center of a box.
pub fn box_center(rect: Rect) -> Point {
    Point::new(rect.x0 + rect.width() / 2.0, rect.y0 + rect.height() / 2.0)
}

/// Point where the ray from the box center towards `towards` leaves the box.
///
/// The ray's slope `|dy/dx|` is compared with the box's half-diagonal slope
/// `half_height/half_width`: shallower rays exit through the left or right
/// edge, steeper ones through the top or bottom. The signs of `dx` and `dy`
/// pick which of the two edges.
pub fn edge_anchor(rect: Rect, towards: Point) -> Point {
    let center = box_center(rect);
    let half_w = (rect.width() / 2.0).abs();
    let half_h = (rect.height() / 2.0).abs();
    if half_w <= 0.0 && half_h <= 0.0 {
        return center;
    }

    let dx = towards.x - center.x;
    let dy = towards.y - center.y;
    let run = if dx == 0.0 { SLOPE_EPSILON } else { dx };
    let slope = (dy / run).abs();
    let sign_x = if dx >= 0.0 { 1.0 } else { -1.0 };
    let sign_y = if dy >= 0.0 { 1.0 } else { -1.0 };

    if slope * half_w <= half_h {
        Point::new(center.x + sign_x * half_w, center.y + sign_y * half_w * slope)
    } else {
        // slope > half_h / half_w >= 0, so the division is safe
        Point::new(center.x + sign_x * half_h / slope, center.y + sign_y * half_h)
    }
}

/// Axis-aligned containment test, inclusive of the boundary.
pub fn point_in_box(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Check if `point` lies within `threshold` of the box's bottom-right corner
/// on both axes.
pub fn near_resize_handle(point: Point, rect: Rect, threshold: f64) -> bool {
    (point.x - rect.x1).abs() < threshold && (point.y - rect.y1).abs() < threshold
}

/// Rectangle spanned by two corner points, with non-negative width and height.
pub fn normalized_rect(a: Point, b: Point) -> Rect {
    Rect::from_points(a, b)
}

/// Drawable geometry of an arrow between two boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowRoute {
    /// Anchor on the source box boundary.
    pub start: Point,
    /// Anchor on the target box boundary (arrowhead tip).
    pub end: Point,
    /// Midpoint of the shaft, where the label is drawn.
    pub midpoint: Point,
    /// Arrowhead triangle: tip, then the two back corners.
    pub head: [Point; 3],
}

/// Route an arrow from `from` to `to`, anchoring both ends on the box
/// boundaries facing each other.
pub fn arrow_route(from: Rect, to: Rect) -> ArrowRoute {
    let start = edge_anchor(from, box_center(to));
    let end = edge_anchor(to, box_center(from));
    let midpoint = start.midpoint(end);
    let head = arrow_head(start, end, ARROW_HEAD_LENGTH, ARROW_HEAD_SPREAD);
    ArrowRoute {
        start,
        end,
        midpoint,
        head,
    }
}

/// Arrowhead triangle pointing along `start -> end`.
pub fn arrow_head(start: Point, end: Point, length: f64, spread: f64) -> [Point; 3] {
    let angle = (end - start).atan2();
    let back = |a: f64| end - Vec2::from_angle(a) * length;
    [end, back(angle - spread), back(angle + spread)]
}
