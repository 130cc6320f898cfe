//! Pointer input types for mouse and touch events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Raw pointer coordinates in screen space.
///
/// Mouse samples carry a single client position; touch samples carry every
/// active touch point, of which only the first is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum PointerSample {
    Mouse { client: Point },
    Touch { touches: Vec<Point> },
}

impl PointerSample {
    pub fn mouse(x: f64, y: f64) -> Self {
        PointerSample::Mouse {
            client: Point::new(x, y),
        }
    }

    pub fn touch(x: f64, y: f64) -> Self {
        PointerSample::Touch {
            touches: vec![Point::new(x, y)],
        }
    }

    pub fn source(&self) -> PointerSource {
        match self {
            PointerSample::Mouse { .. } => PointerSource::Mouse,
            PointerSample::Touch { .. } => PointerSource::Touch,
        }
    }

    /// Screen position of the primary contact, if there is one.
    pub fn primary(&self) -> Option<Point> {
        match self {
            PointerSample::Mouse { client } => Some(*client),
            PointerSample::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Pointer event in drawing-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => *position,
        }
    }
}
