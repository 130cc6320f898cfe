//! Tool system for the diagram canvas.

use crate::shapes::ElementId;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Select, move and resize shapes.
    #[default]
    Select,
    /// Draw a box by dragging.
    Box,
    /// Connect two shapes.
    Arrow,
    /// Place a text label.
    Text,
}

impl ToolKind {
    /// Get all tools in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[ToolKind::Select, ToolKind::Box, ToolKind::Arrow, ToolKind::Text]
    }

    /// Stable name used in scripts and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Box => "box",
            ToolKind::Arrow => "arrow",
            ToolKind::Text => "text",
        }
    }

    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Box => "Box",
            ToolKind::Arrow => "Arrow",
            ToolKind::Text => "Text",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a tool name is not one of the four known tools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool: {0:?}")]
pub struct ParseToolError(pub String);

impl FromStr for ToolKind {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::all()
            .iter()
            .copied()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}

/// Minimum preview width for a drawn box to be committed (exclusive).
pub const MIN_DRAWN_BOX_WIDTH: f64 = 20.0;
/// Minimum preview height for a drawn box to be committed (exclusive).
pub const MIN_DRAWN_BOX_HEIGHT: f64 = 15.0;

/// Pointer gesture currently in progress.
///
/// Exactly one mode is active at a time; every gesture returns to `Idle` on
/// pointer-up or cancel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Moving a shape.
    Dragging {
        id: ElementId,
        /// Pointer position relative to the shape's top-left corner.
        offset: Vec2,
    },
    /// Resizing a box from its bottom-right handle.
    Resizing {
        id: ElementId,
        /// Pointer position when the resize started.
        start: Point,
        /// Box size when the resize started.
        original: Size,
    },
    /// Rubber-banding a new box.
    DrawingBox {
        start: Point,
        current: Point,
    },
    /// Dragging out a new arrow.
    DrawingArrow {
        /// Source shape, or `None` for a floating start.
        from: Option<ElementId>,
        /// Anchor of the preview line (source center or raw press point).
        start: Point,
        current: Point,
    },
}

impl InteractionMode {
    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, InteractionMode::Idle)
    }

    /// Shape being moved or resized, if any.
    pub fn target(&self) -> Option<&ElementId> {
        match self {
            InteractionMode::Dragging { id, .. } | InteractionMode::Resizing { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Normalized preview rectangle while drawing a box.
    pub fn box_preview(&self) -> Option<Rect> {
        match self {
            InteractionMode::DrawingBox { start, current } => {
                Some(crate::geometry::normalized_rect(*start, *current))
            }
            _ => None,
        }
    }
}

/// Check whether a drawn box preview is large enough to become a shape.
pub fn box_preview_commits(preview: Rect) -> bool {
    preview.width() > MIN_DRAWN_BOX_WIDTH && preview.height() > MIN_DRAWN_BOX_HEIGHT
}
