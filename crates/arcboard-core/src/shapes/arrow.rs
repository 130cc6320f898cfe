//! Arrow connecting two shapes.

use super::ElementId;
use serde::{Deserialize, Serialize};

/// A directed connection from one shape to another.
///
/// Arrows store only the endpoint ids; the drawn line is recomputed from the
/// endpoint boxes (see [`crate::geometry::arrow_route`]) so it follows the
/// shapes when they are moved or resized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub(crate) id: ElementId,
    /// Source shape.
    pub from: ElementId,
    /// Target shape (where the arrowhead points).
    pub to: ElementId,
    #[serde(default)]
    pub label: String,
    /// Stroke color (hex).
    pub color: String,
}

impl Arrow {
    /// Create a new arrow. The id is assigned when it is added to a document.
    pub fn new(from: ElementId, to: ElementId, color: impl Into<String>) -> Self {
        Self {
            id: ElementId::default(),
            from,
            to,
            label: String::new(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Check if either endpoint is the given shape.
    pub fn touches(&self, shape: &ElementId) -> bool {
        &self.from == shape || &self.to == shape
    }

    /// Arrows must connect two distinct shapes.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Merge the fields present in `patch` into this arrow.
    pub fn apply(&mut self, patch: ArrowPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial update for an arrow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrowPatch {
    pub label: Option<String>,
    pub color: Option<String>,
}

impl ArrowPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }
}
