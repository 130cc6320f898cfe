//! Keyboard shortcut registry and dispatch.

use arcboard_core::Canvas;

/// What a shortcut does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Delete the selected shape and its arrows.
    DeleteSelection,
    /// Drop selection and text edit, back to the select tool.
    Cancel,
    /// Leave inline label editing.
    FinishEdit,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: ShortcutAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, action: ShortcutAction, description: &'static str) -> Self {
        Self {
            key,
            action,
            description,
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Delete", ShortcutAction::DeleteSelection, "Delete selected shape"),
            Shortcut::new("Backspace", ShortcutAction::DeleteSelection, "Delete selected shape"),
            Shortcut::new("Escape", ShortcutAction::Cancel, "Cancel current action"),
            Shortcut::new("Enter", ShortcutAction::FinishEdit, "Finish editing label"),
        ]
    }

    /// Look up the shortcut bound to a key name (case-insensitive).
    pub fn find(key: &str) -> Option<Shortcut> {
        Self::all()
            .into_iter()
            .find(|s| s.key.eq_ignore_ascii_case(key.trim()))
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.key, shortcut.description);
        }
        println!();
    }
}

/// Apply the shortcut bound to `key`. Returns false if the key is unbound
/// or the shortcut does not apply right now.
pub fn handle_key(canvas: &mut Canvas, key: &str) -> bool {
    let Some(shortcut) = ShortcutRegistry::find(key) else {
        log::debug!("no shortcut for key {key:?}");
        return false;
    };

    match shortcut.action {
        // Backspace while typing a label edits the label, not the canvas.
        ShortcutAction::DeleteSelection if canvas.is_editing() => false,
        ShortcutAction::DeleteSelection => canvas.delete_selected().is_some(),
        ShortcutAction::Cancel => {
            canvas.cancel();
            true
        }
        ShortcutAction::FinishEdit => {
            let was_editing = canvas.is_editing();
            canvas.finish_text_edit();
            was_editing
        }
    }
}
