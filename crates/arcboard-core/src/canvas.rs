//! Canvas document and session state.

use crate::colors::DEFAULT_COLOR;
use crate::geometry::{ArrowRoute, arrow_route};
use crate::shapes::{Arrow, ArrowPatch, ElementId, Shape, ShapePatch};
use crate::tools::{InteractionMode, ToolKind};
use crate::widget::{Handle, WidgetState, resize_handle};
use kurbo::{Point, Rect};

/// A canvas document: shapes in z-order plus the arrows between them.
///
/// The document exclusively owns its shapes and arrows and hands out ids
/// from its own counter, so independent documents never interfere.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasDocument {
    /// Shapes back to front; later shapes are drawn on top.
    shapes: Vec<Shape>,
    arrows: Vec<Arrow>,
    /// Counter for the next generated id.
    next_id: u64,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// First counter value of a fresh or cleared document.
    pub const FIRST_ID: u64 = 1;

    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            arrows: Vec::new(),
            next_id: Self::FIRST_ID,
        }
    }

    /// Take the next id from the counter.
    fn generate_id(&mut self) -> ElementId {
        let id = ElementId::from_counter(self.next_id);
        self.next_id += 1;
        id
    }

    /// Counter value the next generated id will use.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    /// Append a shape on top of the z-order with a freshly generated id.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> ElementId {
        let mut shape = shape.into();
        let id = self.generate_id();
        shape.assign_id(id.clone());
        log::debug!("added {} {}", shape.kind(), id);
        self.shapes.push(shape);
        id
    }

    /// Append an arrow with a freshly generated id.
    ///
    /// Arrows must connect two distinct shapes that exist in the document;
    /// anything else is discarded and `None` is returned.
    pub fn add_arrow(&mut self, mut arrow: Arrow) -> Option<ElementId> {
        if arrow.is_self_loop() {
            log::debug!("discarding self-loop arrow on {}", arrow.from);
            return None;
        }
        if !self.contains_shape(&arrow.from) || !self.contains_shape(&arrow.to) {
            log::debug!("discarding arrow {} -> {}: missing endpoint", arrow.from, arrow.to);
            return None;
        }
        let id = self.generate_id();
        arrow.id = id.clone();
        log::debug!("added arrow {} ({} -> {})", id, arrow.from, arrow.to);
        self.arrows.push(arrow);
        Some(id)
    }

    /// Merge `patch` into the shape with the given id.
    /// Returns false (and changes nothing) if the id is unknown.
    pub fn update_shape(&mut self, id: &ElementId, patch: ShapePatch) -> bool {
        match self.shapes.iter_mut().find(|s| s.id() == id) {
            Some(shape) => {
                shape.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Merge `patch` into the arrow with the given id.
    /// Returns false (and changes nothing) if the id is unknown.
    pub fn update_arrow(&mut self, id: &ElementId, patch: ArrowPatch) -> bool {
        match self.arrows.iter_mut().find(|a| a.id() == id) {
            Some(arrow) => {
                arrow.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Remove a shape and every arrow that starts or ends at it.
    pub fn remove_shape(&mut self, id: &ElementId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        let shape = self.shapes.remove(index);
        let before = self.arrows.len();
        self.arrows.retain(|a| !a.touches(id));
        log::debug!(
            "removed {} {} and {} connected arrow(s)",
            shape.kind(),
            id,
            before - self.arrows.len()
        );
        Some(shape)
    }

    /// Remove a single arrow.
    pub fn remove_arrow(&mut self, id: &ElementId) -> Option<Arrow> {
        let index = self.arrows.iter().position(|a| a.id() == id)?;
        Some(self.arrows.remove(index))
    }

    /// Remove everything and restart id generation.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.arrows.clear();
        self.next_id = Self::FIRST_ID;
    }

    /// Topmost shape containing `point`, scanning front to back.
    pub fn topmost_hit_at(&self, point: Point) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.hit_test(point))
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: &ElementId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get an arrow by ID.
    pub fn get_arrow(&self, id: &ElementId) -> Option<&Arrow> {
        self.arrows.iter().find(|a| a.id() == id)
    }

    pub fn contains_shape(&self, id: &ElementId) -> bool {
        self.get_shape(id).is_some()
    }

    /// Get shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get arrows in creation order.
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.arrows.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Get the number of arrows.
    pub fn arrow_count(&self) -> usize {
        self.arrows.len()
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(Shape::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Drawable geometry for every arrow whose endpoints both exist.
    pub fn arrow_routes(&self) -> Vec<(&Arrow, ArrowRoute)> {
        self.arrows
            .iter()
            .filter_map(|arrow| {
                let from = self.get_shape(&arrow.from)?;
                let to = self.get_shape(&arrow.to)?;
                Some((arrow, arrow_route(from.bounds(), to.bounds())))
            })
            .collect()
    }

    /// Short status line, e.g. `3 elements · 2 connections`.
    pub fn summary(&self) -> String {
        format!("{} elements · {} connections", self.len(), self.arrow_count())
    }
}

/// Provisional geometry of the gesture in progress, for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    /// Rubber-band rectangle of a box being drawn.
    Box(Rect),
    /// Line from the arrow anchor to the live pointer position.
    Arrow { start: Point, end: Point },
}

/// Runtime editing session (not persisted).
///
/// The session is the single writer of its document: every pointer event
/// and editing command goes through it, in arrival order.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    /// Active tool.
    pub(crate) tool: ToolKind,
    /// Ambient color applied to new shapes and arrows.
    pub(crate) color: String,
    /// Currently selected shape.
    pub(crate) selection: Option<ElementId>,
    /// Shape whose label is being edited inline.
    pub(crate) editing: Option<ElementId>,
    /// Pointer gesture in progress.
    pub(crate) mode: InteractionMode,
    /// Last pointer position seen, in canvas coordinates.
    pub(crate) pointer: Point,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::with_document(CanvasDocument::new())
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            tool: ToolKind::default(),
            color: DEFAULT_COLOR.to_string(),
            selection: None,
            editing: None,
            mode: InteractionMode::Idle,
            pointer: Point::ZERO,
        }
    }

    /// Get the active tool.
    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    /// Ambient drawing color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get the pointer gesture in progress.
    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    /// Last pointer position, in canvas coordinates.
    pub fn pointer_position(&self) -> Point {
        self.pointer
    }

    /// Currently selected shape.
    pub fn selection(&self) -> Option<&ElementId> {
        self.selection.as_ref()
    }

    /// Selected shape, if it still exists.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.document.get_shape(self.selection.as_ref()?)
    }

    /// Select a shape (replaces the previous selection).
    pub fn select(&mut self, id: ElementId) {
        self.selection = Some(id);
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Check if a shape is selected.
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selection.as_ref() == Some(id)
    }

    /// Shape whose label is being edited, if any.
    pub fn editing_shape(&self) -> Option<&ElementId> {
        self.editing.as_ref()
    }

    /// Check if a text edit is active.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enter inline label editing for a shape.
    pub fn enter_text_editing(&mut self, id: ElementId) {
        self.editing = Some(id);
    }

    /// Leave inline label editing; selection is kept.
    pub fn finish_text_edit(&mut self) {
        self.editing = None;
    }

    /// Get widget state for a shape.
    pub fn widget_state(&self, id: &ElementId) -> WidgetState {
        if self.editing.as_ref() == Some(id) {
            WidgetState::Editing
        } else if self.is_selected(id) {
            WidgetState::Selected
        } else {
            WidgetState::Normal
        }
    }

    /// Handles to draw for the current selection.
    pub fn selection_handles(&self) -> Vec<Handle> {
        self.selected_shape().and_then(resize_handle).into_iter().collect()
    }

    /// Replace a shape's label. Unknown ids are ignored.
    pub fn update_label(&mut self, id: &ElementId, text: impl Into<String>) -> bool {
        self.document.update_shape(id, ShapePatch::label(text))
    }

    /// Replace an arrow's label. Unknown ids are ignored.
    pub fn update_arrow_label(&mut self, id: &ElementId, text: impl Into<String>) -> bool {
        self.document.update_arrow(id, ArrowPatch::label(text))
    }

    /// Set the ambient color and repaint the selected shape, if any.
    pub fn set_color_on_selection(&mut self, color: impl Into<String>) {
        self.color = color.into();
        if let Some(id) = &self.selection {
            self.document.update_shape(id, ShapePatch::color(self.color.clone()));
        }
    }

    /// Delete the selected shape along with its arrows.
    /// Does nothing if no shape is selected.
    pub fn delete_selected(&mut self) -> Option<Shape> {
        let id = self.selection.take()?;
        self.editing = None;
        if self.mode.target() == Some(&id) {
            self.mode = InteractionMode::Idle;
        }
        self.document.remove_shape(&id)
    }

    /// Empty the document and reset all transient state.
    pub fn clear_all(&mut self) {
        self.document.clear();
        self.selection = None;
        self.editing = None;
        self.mode = InteractionMode::Idle;
        log::info!("canvas cleared");
    }

    /// Global cancel: drop selection, text edit and any gesture in progress,
    /// and switch back to the select tool. The document is left untouched.
    pub fn cancel(&mut self) {
        self.selection = None;
        self.editing = None;
        self.mode = InteractionMode::Idle;
        self.tool = ToolKind::Select;
    }

    /// Provisional shape or arrow of the gesture in progress.
    pub fn preview(&self) -> Option<Preview> {
        match &self.mode {
            InteractionMode::DrawingBox { .. } => self.mode.box_preview().map(Preview::Box),
            InteractionMode::DrawingArrow { start, current, .. } => Some(Preview::Arrow {
                start: *start,
                end: *current,
            }),
            _ => None,
        }
    }
}
