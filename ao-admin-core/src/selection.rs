//! Row selection toggle

use crate::types::Row;

/// Flips the selected state of one row when the row is activated.
///
/// Bound to a single row at construction; each activation inverts the
/// state, so two activations restore the original one.
#[derive(Debug)]
pub struct SelectionToggle<'a> {
    row: &'a mut Row,
}

impl<'a> SelectionToggle<'a> {
    pub fn new(row: &'a mut Row) -> Self {
        Self { row }
    }

    /// Handle one activation, returning the new selected state
    pub fn activate(&mut self) -> bool {
        let selected = !self.row.is_selected();
        self.row.set_selected(selected);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SELECTED_MARKER;

    #[test]
    fn test_activate_sets_marker() {
        let mut row = Row::new();
        assert!(SelectionToggle::new(&mut row).activate());
        assert_eq!(row.marker(), Some(SELECTED_MARKER));
    }

    #[test]
    fn test_even_activations_restore_state() {
        for initially_selected in [false, true] {
            let mut row = Row::new();
            if initially_selected {
                SelectionToggle::new(&mut row).activate();
            }
            let mut toggle = SelectionToggle::new(&mut row);
            for _ in 0..6 {
                toggle.activate();
            }
            assert_eq!(row.is_selected(), initially_selected);
        }
    }

    #[test]
    fn test_odd_activations_invert_state() {
        let mut row = Row::new();
        let mut toggle = SelectionToggle::new(&mut row);
        toggle.activate();
        toggle.activate();
        assert!(toggle.activate());
        assert!(row.marker().is_some());
    }
}
