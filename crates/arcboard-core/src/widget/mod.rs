//! Widget state for shapes on the canvas.
//!
//! Shapes remain pure data. The canvas derives per-shape UI state
//! (selected, editing) and manipulation handles from its session fields.

mod handles;
mod state;

pub use handles::{hit_test_handle, resize_handle, Handle, HandleKind, HANDLE_RADIUS};
pub use state::WidgetState;
