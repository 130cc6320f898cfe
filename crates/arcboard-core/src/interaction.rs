//! Pointer state machine.
//!
//! Transitions, by active tool:
//!
//! ```text
//! Idle ──down (select, hit handle)──▶ Resizing ──move──▶ resize ──up──▶ Idle
//! Idle ──down (select, hit body)────▶ Dragging ──move──▶ move   ──up──▶ Idle
//! Idle ──down (select, miss)────────▶ Idle (selection and edit cleared)
//! Idle ──down (box)─────────────────▶ DrawingBox ──move──▶ preview ──up──▶ commit? ▶ Idle
//! Idle ──down (arrow)───────────────▶ DrawingArrow ──move──▶ preview ──up──▶ connect? ▶ Idle
//! Idle ──down (text)────────────────▶ Idle (text created, selected, editing)
//! ```
//!
//! Events are handled strictly in arrival order; each handler sees the
//! effects of every earlier one.

use crate::canvas::Canvas;
use crate::geometry::box_center;
use crate::input::PointerEvent;
use crate::shapes::{Arrow, BoxNode, ElementId, Shape, ShapePatch, TextNode};
use crate::tools::{InteractionMode, ToolKind, box_preview_commits};
use crate::widget::{HandleKind, hit_test_handle};
use kurbo::Point;

impl Canvas {
    /// Feed a pointer event, in canvas coordinates.
    ///
    /// Returns the id of the shape or arrow created by this event, if any.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<ElementId> {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => {
                self.pointer_move(position);
                None
            }
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Start a gesture according to the active tool.
    pub fn pointer_down(&mut self, point: Point) -> Option<ElementId> {
        self.pointer = point;
        if self.mode.is_active() {
            log::debug!("pointer down during {:?}, replacing gesture", self.mode);
            self.mode = InteractionMode::Idle;
        }

        match self.tool {
            ToolKind::Select => {
                self.begin_select(point);
                None
            }
            ToolKind::Box => {
                self.mode = InteractionMode::DrawingBox {
                    start: point,
                    current: point,
                };
                None
            }
            ToolKind::Arrow => {
                let (from, start) = match self.document.topmost_hit_at(point) {
                    Some(shape) => (Some(shape.id().clone()), box_center(shape.bounds())),
                    None => (None, point),
                };
                self.mode = InteractionMode::DrawingArrow {
                    from,
                    start,
                    current: point,
                };
                None
            }
            ToolKind::Text => {
                let id = self
                    .document
                    .add_shape(TextNode::centered_at(point, self.color.clone()));
                self.selection = Some(id.clone());
                self.editing = Some(id.clone());
                self.tool = ToolKind::Select;
                Some(id)
            }
        }
    }

    fn begin_select(&mut self, point: Point) {
        let Some(shape) = self.document.topmost_hit_at(point) else {
            self.selection = None;
            self.editing = None;
            return;
        };

        let id = shape.id().clone();
        self.mode = match hit_test_handle(shape, point) {
            Some(HandleKind::Resize) => InteractionMode::Resizing {
                id: id.clone(),
                start: point,
                original: shape.size(),
            },
            None => InteractionMode::Dragging {
                id: id.clone(),
                offset: point - shape.position(),
            },
        };
        log::trace!("begin {:?}", self.mode);
        self.selection = Some(id);
    }

    /// Update the gesture in progress. Does nothing when idle.
    pub fn pointer_move(&mut self, point: Point) {
        self.pointer = point;
        match &mut self.mode {
            InteractionMode::Idle => {}
            InteractionMode::Dragging { id, offset } => {
                let position = Point::new((point.x - offset.x).max(0.0), (point.y - offset.y).max(0.0));
                self.document.update_shape(id, ShapePatch::position(position));
            }
            InteractionMode::Resizing {
                id,
                start,
                original,
            } => {
                let size = BoxNode::clamped_size(
                    original.width + point.x - start.x,
                    original.height + point.y - start.y,
                );
                self.document.update_shape(id, ShapePatch::size(size));
            }
            InteractionMode::DrawingBox { current, .. }
            | InteractionMode::DrawingArrow { current, .. } => *current = point,
        }
    }

    /// Finish the gesture in progress and return to idle.
    ///
    /// Returns the id of a committed box or arrow.
    pub fn pointer_up(&mut self, point: Point) -> Option<ElementId> {
        self.pointer = point;
        match std::mem::take(&mut self.mode) {
            InteractionMode::DrawingBox { start, current } => {
                let preview = crate::geometry::normalized_rect(start, current);
                if !box_preview_commits(preview) {
                    log::trace!("box preview {preview:?} too small, discarded");
                    return None;
                }
                let id = self
                    .document
                    .add_shape(BoxNode::from_rect(preview, self.color.clone()));
                self.selection = Some(id.clone());
                self.editing = Some(id.clone());
                self.tool = ToolKind::Select;
                Some(id)
            }
            InteractionMode::DrawingArrow { from, .. } => {
                let from = from?;
                let to = self.document.topmost_hit_at(point).map(Shape::id)?.clone();
                if to == from {
                    return None;
                }
                self.document
                    .add_arrow(Arrow::new(from, to, self.color.clone()))
            }
            InteractionMode::Dragging { .. }
            | InteractionMode::Resizing { .. }
            | InteractionMode::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::DEFAULT_COLOR;
    use kurbo::{Rect, Size};
    use pretty_assertions::assert_eq;

    fn drag(canvas: &mut Canvas, from: Point, to: Point) -> Option<ElementId> {
        canvas.pointer_down(from);
        canvas.pointer_move(to);
        canvas.pointer_up(to)
    }

    fn add_box(canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64) -> ElementId {
        canvas
            .document
            .add_shape(BoxNode::new(Point::new(x, y), w, h, DEFAULT_COLOR))
    }

    #[test]
    fn test_draw_box_commits_and_selects() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Box);
        let id = drag(&mut canvas, Point::new(10.0, 10.0), Point::new(90.0, 50.0)).unwrap();

        let shape = canvas.document.get_shape(&id).unwrap();
        assert_eq!(shape.bounds(), Rect::new(10.0, 10.0, 90.0, 50.0));
        assert_eq!(shape.label(), "");
        assert_eq!(shape.color(), DEFAULT_COLOR);
        assert_eq!(canvas.selection(), Some(&id));
        assert_eq!(canvas.editing_shape(), Some(&id));
        assert_eq!(canvas.tool(), ToolKind::Select);
        assert_eq!(canvas.mode(), &InteractionMode::Idle);
    }

    #[test]
    fn test_draw_box_reverse_direction_normalizes() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Box);
        let id = drag(&mut canvas, Point::new(200.0, 150.0), Point::new(100.0, 100.0)).unwrap();
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::bounds),
            Some(Rect::new(100.0, 100.0, 200.0, 150.0))
        );
    }

    #[test]
    fn test_small_box_is_discarded() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Box);
        assert!(drag(&mut canvas, Point::new(10.0, 10.0), Point::new(30.0, 60.0)).is_none());
        assert!(drag(&mut canvas, Point::new(10.0, 10.0), Point::new(60.0, 25.0)).is_none());
        assert!(canvas.document.is_empty());
        assert_eq!(canvas.tool(), ToolKind::Box);
        assert!(canvas.preview().is_none());
    }

    #[test]
    fn test_box_preview_follows_pointer() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Box);
        canvas.pointer_down(Point::new(50.0, 50.0));
        canvas.pointer_move(Point::new(20.0, 80.0));
        assert_eq!(
            canvas.preview(),
            Some(crate::canvas::Preview::Box(Rect::new(20.0, 50.0, 50.0, 80.0)))
        );
    }

    #[test]
    fn test_text_tool_places_centered_text() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Text);
        let id = canvas.pointer_down(Point::new(200.0, 100.0)).unwrap();

        let shape = canvas.document.get_shape(&id).unwrap();
        assert_eq!(shape.position(), Point::new(140.0, 84.0));
        assert_eq!(shape.size(), Size::new(120.0, 32.0));
        assert_eq!(canvas.editing_shape(), Some(&id));
        assert_eq!(canvas.tool(), ToolKind::Select);
        assert!(canvas.pointer_up(Point::new(200.0, 100.0)).is_none());
    }

    #[test]
    fn test_drag_moves_with_offset() {
        let mut canvas = Canvas::new();
        let id = add_box(&mut canvas, 100.0, 100.0, 80.0, 40.0);
        canvas.pointer_down(Point::new(110.0, 120.0));
        assert_eq!(canvas.selection(), Some(&id));
        canvas.pointer_move(Point::new(160.0, 170.0));
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::position),
            Some(Point::new(150.0, 150.0))
        );
        canvas.pointer_up(Point::new(160.0, 170.0));
        assert_eq!(canvas.mode(), &InteractionMode::Idle);
    }

    #[test]
    fn test_drag_clamps_to_origin() {
        let mut canvas = Canvas::new();
        let id = add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        canvas.pointer_down(Point::new(20.0, 20.0));
        canvas.pointer_move(Point::new(-100.0, 5.0));
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::position),
            Some(Point::new(0.0, 0.0))
        );
    }

    #[test]
    fn test_resize_from_handle_clamps() {
        let mut canvas = Canvas::new();
        let id = add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        canvas.pointer_down(Point::new(88.0, 48.0));
        assert!(matches!(canvas.mode(), InteractionMode::Resizing { .. }));

        canvas.pointer_move(Point::new(108.0, 78.0));
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::size),
            Some(Size::new(100.0, 70.0))
        );
        canvas.pointer_move(Point::new(0.0, 0.0));
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::size),
            Some(Size::new(BoxNode::MIN_WIDTH, BoxNode::MIN_HEIGHT))
        );
        canvas.pointer_up(Point::new(0.0, 0.0));
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::position),
            Some(Point::new(10.0, 10.0))
        );
    }

    #[test]
    fn test_text_shapes_have_no_resize_handle() {
        let mut canvas = Canvas::new();
        let id = canvas
            .document
            .add_shape(TextNode::new(Point::new(0.0, 0.0), DEFAULT_COLOR));
        canvas.pointer_down(Point::new(118.0, 30.0));
        assert!(matches!(canvas.mode(), InteractionMode::Dragging { id: target, .. } if *target == id));
    }

    #[test]
    fn test_click_on_empty_canvas_clears_selection() {
        let mut canvas = Canvas::new();
        let id = add_box(&mut canvas, 0.0, 0.0, 80.0, 40.0);
        canvas.select(id.clone());
        canvas.enter_text_editing(id);
        canvas.pointer_down(Point::new(500.0, 500.0));
        assert!(canvas.selection().is_none());
        assert!(!canvas.is_editing());
        assert_eq!(canvas.mode(), &InteractionMode::Idle);
    }

    #[test]
    fn test_arrow_between_boxes() {
        let mut canvas = Canvas::new();
        let a = add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        let b = add_box(&mut canvas, 300.0, 10.0, 80.0, 40.0);
        canvas.set_tool(ToolKind::Arrow);

        canvas.pointer_down(Point::new(50.0, 30.0));
        canvas.pointer_move(Point::new(200.0, 30.0));
        assert_eq!(
            canvas.preview(),
            Some(crate::canvas::Preview::Arrow {
                start: Point::new(50.0, 30.0),
                end: Point::new(200.0, 30.0),
            })
        );
        let id = canvas.pointer_up(Point::new(340.0, 30.0)).unwrap();

        let arrow = canvas.document.get_arrow(&id).unwrap();
        assert_eq!(arrow.from, a);
        assert_eq!(arrow.to, b);
        assert_eq!(arrow.label, "");
        assert_eq!(canvas.tool(), ToolKind::Arrow);
    }

    #[test]
    fn test_arrow_rejections() {
        let mut canvas = Canvas::new();
        add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        canvas.set_tool(ToolKind::Arrow);

        // Same shape.
        assert!(drag(&mut canvas, Point::new(20.0, 20.0), Point::new(60.0, 40.0)).is_none());
        // Released on empty space.
        assert!(drag(&mut canvas, Point::new(20.0, 20.0), Point::new(500.0, 500.0)).is_none());
        // Started on empty space.
        assert!(drag(&mut canvas, Point::new(500.0, 500.0), Point::new(20.0, 20.0)).is_none());
        assert_eq!(canvas.document.arrow_count(), 0);
        assert!(canvas.preview().is_none());
    }

    #[test]
    fn test_event_dispatch() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Box);
        let events = [
            PointerEvent::Down { position: Point::new(0.0, 0.0) },
            PointerEvent::Move { position: Point::new(100.0, 60.0) },
            PointerEvent::Up { position: Point::new(100.0, 60.0) },
        ];
        let created: Vec<_> = events
            .into_iter()
            .filter_map(|e| canvas.handle_pointer_event(e))
            .collect();
        assert_eq!(created, vec![ElementId::from("el-1")]);
        assert_eq!(canvas.pointer_position(), Point::new(100.0, 60.0));
    }

    #[test]
    fn test_move_when_idle_is_noop() {
        let mut canvas = Canvas::new();
        add_box(&mut canvas, 0.0, 0.0, 80.0, 40.0);
        let before = canvas.document.clone();
        canvas.pointer_move(Point::new(40.0, 20.0));
        assert!(canvas.pointer_up(Point::new(40.0, 20.0)).is_none());
        assert_eq!(canvas.document, before);
    }

    #[test]
    fn test_cancel_during_drag_stops_moving() {
        let mut canvas = Canvas::new();
        let id = add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        canvas.pointer_down(Point::new(20.0, 20.0));
        canvas.pointer_move(Point::new(30.0, 30.0));
        canvas.cancel();
        assert_eq!(canvas.mode(), &InteractionMode::Idle);

        canvas.pointer_move(Point::new(100.0, 100.0));
        assert!(canvas.pointer_up(Point::new(100.0, 100.0)).is_none());
        assert_eq!(
            canvas.document.get_shape(&id).map(Shape::position),
            Some(Point::new(20.0, 20.0))
        );
    }

    #[test]
    fn test_cancel_during_box_draw_discards_preview() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Box);
        canvas.pointer_down(Point::new(10.0, 10.0));
        canvas.pointer_move(Point::new(200.0, 120.0));
        assert!(canvas.preview().is_some());

        canvas.cancel();
        assert!(canvas.preview().is_none());
        assert!(canvas.pointer_up(Point::new(200.0, 120.0)).is_none());
        assert!(canvas.document.is_empty());
    }

    #[test]
    fn test_cancel_during_arrow_draw_commits_nothing() {
        let mut canvas = Canvas::new();
        add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        add_box(&mut canvas, 300.0, 10.0, 80.0, 40.0);
        canvas.set_tool(ToolKind::Arrow);
        canvas.pointer_down(Point::new(50.0, 30.0));
        canvas.pointer_move(Point::new(340.0, 30.0));

        canvas.cancel();
        assert!(canvas.preview().is_none());
        assert!(canvas.pointer_up(Point::new(340.0, 30.0)).is_none());
        assert_eq!(canvas.document.arrow_count(), 0);
    }

    #[test]
    fn test_down_during_gesture_replaces_it() {
        let mut canvas = Canvas::new();
        let id = add_box(&mut canvas, 10.0, 10.0, 80.0, 40.0);
        canvas.set_tool(ToolKind::Box);
        canvas.pointer_down(Point::new(200.0, 200.0));
        canvas.pointer_move(Point::new(400.0, 300.0));

        // A second press without a release starts a fresh box from the new point.
        canvas.pointer_down(Point::new(500.0, 500.0));
        assert_eq!(
            canvas.mode(),
            &InteractionMode::DrawingBox {
                start: Point::new(500.0, 500.0),
                current: Point::new(500.0, 500.0),
            }
        );
        assert!(canvas.pointer_up(Point::new(500.0, 500.0)).is_none());
        assert_eq!(canvas.document.len(), 1);

        // Same for select: the stale drag is dropped and the new press drags the box.
        canvas.set_tool(ToolKind::Select);
        canvas.pointer_down(Point::new(20.0, 20.0));
        canvas.pointer_down(Point::new(30.0, 30.0));
        assert!(matches!(
            canvas.mode(),
            InteractionMode::Dragging { id: target, offset } if *target == id && *offset == kurbo::Vec2::new(20.0, 20.0)
        ));
    }
}
