//! Dialog contract
//!
//! The core describes dialogs as data; the host decides how to draw them.
//! A host needs to show one dialog at a time and hide it on request.

use crate::types::Submission;

/// What an action button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogActionKind {
    /// Hide the dialog, then deliver the pending submission
    Confirm,
    /// Hide the dialog and do nothing else
    Dismiss,
}

/// A labeled action button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogAction {
    pub label: String,
    pub kind: DialogActionKind,
}

impl DialogAction {
    pub fn new(label: impl Into<String>, kind: DialogActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// A transient dialog with a title, a body and action buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    title: String,
    body: String,
    actions: Vec<DialogAction>,
    on_confirm: Option<Submission>,
}

impl ConfirmDialog {
    /// Informational dialog with a single dismiss action
    pub fn notice(
        title: impl Into<String>,
        body: impl Into<String>,
        close_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            actions: vec![DialogAction::new(close_label, DialogActionKind::Dismiss)],
            on_confirm: None,
        }
    }

    /// Confirmation dialog; confirming delivers `submission`
    pub fn confirmation(
        title: impl Into<String>,
        body: impl Into<String>,
        confirm_label: impl Into<String>,
        close_label: impl Into<String>,
        submission: Submission,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            actions: vec![
                DialogAction::new(confirm_label, DialogActionKind::Confirm),
                DialogAction::new(close_label, DialogActionKind::Dismiss),
            ],
            on_confirm: Some(submission),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn actions(&self) -> &[DialogAction] {
        &self.actions
    }

    /// Whether the dialog offers a confirm action
    pub fn has_confirm(&self) -> bool {
        self.on_confirm.is_some()
    }

    /// The submission that confirming would deliver
    pub fn pending(&self) -> Option<&Submission> {
        self.on_confirm.as_ref()
    }

    /// Consume the dialog and take its confirm payload.
    ///
    /// Taking the dialog by value means the payload can be taken once.
    pub fn into_confirmed(self) -> Option<Submission> {
        self.on_confirm
    }
}

/// Dialog primitive provided by the host
pub trait DialogHost {
    /// Display a dialog, replacing any dialog currently shown
    fn show(&mut self, dialog: ConfirmDialog);

    /// Hide the current dialog and hand it back
    fn hide(&mut self) -> Option<ConfirmDialog>;

    /// The dialog currently shown
    fn current(&self) -> Option<&ConfirmDialog>;

    fn is_showing(&self) -> bool {
        self.current().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_has_single_dismiss_action() {
        let dialog = ConfirmDialog::notice("Nothing selected", "Select a table", "Close");
        assert_eq!(
            dialog.actions(),
            &[DialogAction::new("Close", DialogActionKind::Dismiss)]
        );
        assert!(!dialog.has_confirm());
        assert_eq!(dialog.into_confirmed(), None);
    }

    #[test]
    fn test_confirmation_carries_submission() {
        let submission = Submission {
            form_id: "ao-tables".to_string(),
            action: "delete".to_string(),
            values: vec!["T1".to_string()],
        };
        let dialog =
            ConfirmDialog::confirmation("Delete", "Delete T1?", "Delete", "Cancel", submission.clone());
        assert_eq!(dialog.actions()[0].kind, DialogActionKind::Confirm);
        assert_eq!(dialog.pending(), Some(&submission));
        assert_eq!(dialog.into_confirmed(), Some(submission));
    }
}
