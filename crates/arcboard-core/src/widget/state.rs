//! Widget state definitions.

/// The UI state of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    /// Normal display state - no interaction.
    #[default]
    Normal,
    /// Shape is selected (drawn highlighted, boxes show their resize handle).
    Selected,
    /// Shape label is being edited inline.
    Editing,
}

impl WidgetState {
    /// Check if the shape is selected (either just selected or editing).
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected | Self::Editing)
    }

    /// Check if the shape is in editing mode.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing)
    }
}
