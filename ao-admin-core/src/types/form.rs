//! Form and selectable item types

use serde::{Deserialize, Serialize};

/// A checkbox-like input inside a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    /// Item identifier (submitted value)
    pub value: String,
    /// Whether the item is checked
    pub checked: bool,
}

impl SelectableItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }

    #[must_use]
    pub fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

/// A form owning selectable items.
///
/// The form is the scope of a delete action: only its own items are
/// collected when the action is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    /// Form ID
    pub id: String,
    /// Action the form submits to
    pub action: String,
    /// Items in render order
    pub items: Vec<SelectableItem>,
}

impl Form {
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = SelectableItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Checked items, in render order
    pub fn checked_items(&self) -> impl Iterator<Item = &SelectableItem> {
        self.items.iter().filter(|item| item.checked)
    }

    /// Values of the checked items, in render order
    pub fn checked_values(&self) -> Vec<String> {
        self.checked_items().map(|item| item.value.clone()).collect()
    }

    pub fn item(&self, value: &str) -> Option<&SelectableItem> {
        self.items.iter().find(|item| item.value == value)
    }

    pub fn item_mut(&mut self, value: &str) -> Option<&mut SelectableItem> {
        self.items.iter_mut().find(|item| item.value == value)
    }

    /// Flip the checked state of an item, returning the new state
    pub fn toggle_item(&mut self, value: &str) -> Option<bool> {
        let item = self.item_mut(value)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Uncheck every item
    pub fn clear_checked(&mut self) {
        for item in &mut self.items {
            item.checked = false;
        }
    }
}

/// Payload handed to the submission target once the user confirms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form_id: String,
    pub action: String,
    pub values: Vec<String>,
}

impl Submission {
    /// Capture the form's current checked values
    pub fn from_form(form: &Form) -> Self {
        Self {
            form_id: form.id.clone(),
            action: form.action.clone(),
            values: form.checked_values(),
        }
    }
}
