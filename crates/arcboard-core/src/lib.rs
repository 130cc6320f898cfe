//! Arcboard Core Library
//!
//! Platform-agnostic document model, geometry and pointer interaction logic
//! for the Arcboard diagram editor.

pub mod canvas;
pub mod colors;
pub mod export;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod shapes;
pub mod tools;
pub mod widget;

pub use canvas::{Canvas, CanvasDocument, Preview};
pub use colors::{DEFAULT_COLOR, PALETTE, Palette, PaletteColor};
pub use export::{ExportDocument, ExportError, FORMAT_VERSION, export_file_name, export_json, export_json_at};
pub use geometry::{ArrowRoute, arrow_route, box_center, edge_anchor, point_in_box, to_local_point};
pub use input::{PointerEvent, PointerSample, PointerSource};
pub use shapes::{Arrow, ArrowPatch, BoxNode, ElementId, Shape, ShapeKind, ShapePatch, ShapeTrait, TextNode};
pub use tools::{InteractionMode, ParseToolError, ToolKind};
pub use widget::{Handle, HandleKind, WidgetState};
