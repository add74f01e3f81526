//! List row type

/// Marker rendered for a selected row
pub const SELECTED_MARKER: &str = "ao-plugin-selected";

/// A visual list entry.
///
/// A row has no identity of its own; it is addressed by its position in
/// whatever list owns it. Only [`crate::SelectionToggle`] flips `selected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    selected: bool,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Visual marker reflecting the selection state
    pub fn marker(&self) -> Option<&'static str> {
        self.selected.then_some(SELECTED_MARKER)
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
