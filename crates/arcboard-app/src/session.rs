//! Recorded editing sessions and their replay.
//!
//! A session script is a JSON array of actions, for example:
//!
//! ```json
//! [
//!   {"action": "tool", "tool": "box"},
//!   {"action": "down", "x": 10, "y": 10},
//!   {"action": "move", "x": 90, "y": 50},
//!   {"action": "up", "x": 90, "y": 50},
//!   {"action": "label", "id": "el-1", "text": "Start"},
//!   {"action": "key", "key": "Enter"}
//! ]
//! ```

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::shortcuts::handle_key;
use arcboard_core::{
    Canvas, ElementId, PointerEvent, PointerSample, PointerSource, ToolKind, to_local_point,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Raw pointer coordinates as recorded from the device, in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub source: PointerSource,
}

impl PointerInput {
    pub fn sample(&self) -> PointerSample {
        match self.source {
            PointerSource::Mouse => PointerSample::mouse(self.x, self.y),
            PointerSource::Touch => PointerSample::touch(self.x, self.y),
        }
    }
}

/// One step of a recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    /// Switch tool by name; unknown names are skipped.
    Tool { tool: String },
    /// Pick the ambient color and repaint the selection.
    Color { color: String },
    Down(PointerInput),
    Move(PointerInput),
    Up(PointerInput),
    /// Replace a shape's label.
    Label { id: String, text: String },
    /// Replace an arrow's label.
    ArrowLabel { id: String, text: String },
    /// Press a named key.
    Key { key: String },
    FinishEdit,
    Delete,
    Clear,
    Cancel,
}

/// Parse a session script.
pub fn parse_script(json: &str) -> AppResult<Vec<SessionAction>> {
    Ok(serde_json::from_str(json)?)
}

/// Replays session actions against a canvas.
pub struct Session {
    canvas: Canvas,
    config: AppConfig,
    created: Vec<ElementId>,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            canvas: Canvas::new(),
            config,
            created: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Ids of shapes and arrows created by pointer gestures, in order.
    pub fn created(&self) -> &[ElementId] {
        &self.created
    }

    fn local(&self, input: &PointerInput) -> Point {
        to_local_point(&input.sample(), self.config.surface_origin)
    }

    fn pointer(&mut self, event: PointerEvent) {
        if let Some(id) = self.canvas.handle_pointer_event(event) {
            self.created.push(id);
        }
    }

    /// Apply one action. Returns false if the action was skipped.
    pub fn apply(&mut self, action: &SessionAction) -> bool {
        match action {
            SessionAction::Tool { tool } => match tool.parse::<ToolKind>() {
                Ok(tool) => self.canvas.set_tool(tool),
                Err(e) => {
                    log::warn!("skipping tool action: {e}");
                    return false;
                }
            },
            SessionAction::Color { color } => self.canvas.set_color_on_selection(color.clone()),
            SessionAction::Down(input) => {
                let position = self.local(input);
                self.pointer(PointerEvent::Down { position });
            }
            SessionAction::Move(input) => {
                let position = self.local(input);
                self.pointer(PointerEvent::Move { position });
            }
            SessionAction::Up(input) => {
                let position = self.local(input);
                self.pointer(PointerEvent::Up { position });
            }
            SessionAction::Label { id, text } => {
                if !self.canvas.update_label(&ElementId::from(id.as_str()), text.clone()) {
                    log::warn!("skipping label for unknown shape {id}");
                    return false;
                }
            }
            SessionAction::ArrowLabel { id, text } => {
                if !self
                    .canvas
                    .update_arrow_label(&ElementId::from(id.as_str()), text.clone())
                {
                    log::warn!("skipping label for unknown arrow {id}");
                    return false;
                }
            }
            SessionAction::Key { key } => return handle_key(&mut self.canvas, key),
            SessionAction::FinishEdit => self.canvas.finish_text_edit(),
            SessionAction::Delete => return self.canvas.delete_selected().is_some(),
            SessionAction::Clear => self.canvas.clear_all(),
            SessionAction::Cancel => self.canvas.cancel(),
        }
        true
    }

    /// Apply every action in order. Returns how many were skipped.
    pub fn replay(&mut self, actions: &[SessionAction]) -> usize {
        let skipped = actions.iter().filter(|a| !self.apply(a)).count();
        log::info!(
            "replayed {} action(s), {} skipped: {}",
            actions.len(),
            skipped,
            self.canvas.document.summary()
        );
        skipped
    }

    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}
