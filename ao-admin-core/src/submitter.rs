//! Delete confirmation before form submission
//!
//! Per activation of a delete trigger:
//!
//! ```text
//! Idle → Evaluating → NoSelectionShown ──dismiss──▶ Idle
//!                   → ConfirmationShown ──dismiss──▶ Idle
//!                                       ──confirm──▶ Submitted
//! ```
//!
//! Nothing survives between activations: a submitter borrows the form and
//! the resolver for one activation, and the pending submission lives inside
//! the dialog that is shown.

use crate::dialog::{ConfirmDialog, DialogHost};
use crate::error::CoreResult;
use crate::message::MessageResolver;
use crate::types::{Form, Submission};

/// Separator between selected values in the confirmation body
const VALUE_SEPARATOR: &str = ", ";

/// Phase reached by one activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    NoSelectionShown,
    ConfirmationShown,
    Submitted,
}

/// Receiver of confirmed submissions
pub trait FormSubmit {
    fn submit(&mut self, submission: &Submission) -> CoreResult<()>;
}

/// Message keys used by the submitter's dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterMessages {
    pub no_selection_title: &'static str,
    pub no_selection_body: &'static str,
    pub confirm_title: &'static str,
    /// Takes the joined selection as `{0}`
    pub confirm_body: &'static str,
    pub confirm_label: &'static str,
    pub close_label: &'static str,
}

impl Default for SubmitterMessages {
    fn default() -> Self {
        Self {
            no_selection_title: "ao.admin.tables.delete.none.title",
            no_selection_body: "ao.admin.tables.delete.none.body",
            confirm_title: "ao.admin.tables.delete.confirm.title",
            confirm_body: "ao.admin.tables.delete.confirm.body",
            confirm_label: "ao.admin.tables.delete.confirm.action",
            close_label: "ao.admin.dialog.close",
        }
    }
}

/// Intercepts a delete trigger and asks for confirmation first
#[derive(Debug)]
pub struct ConfirmingFormSubmitter<'a> {
    form: &'a Form,
    resolver: &'a MessageResolver,
    messages: &'a SubmitterMessages,
}

impl<'a> ConfirmingFormSubmitter<'a> {
    pub fn new(
        form: &'a Form,
        resolver: &'a MessageResolver,
        messages: &'a SubmitterMessages,
    ) -> Self {
        Self {
            form,
            resolver,
            messages,
        }
    }

    /// Handle one activation of the delete trigger.
    ///
    /// Never submits. Every message is resolved before the host is touched,
    /// so a missing key leaves the host as it was.
    pub fn activate<H: DialogHost>(&self, host: &mut H) -> CoreResult<SubmitPhase> {
        let dialog = self.build_dialog()?;
        let phase = if dialog.has_confirm() {
            SubmitPhase::ConfirmationShown
        } else {
            SubmitPhase::NoSelectionShown
        };

        if host.is_showing() {
            host.hide();
        }
        host.show(dialog);
        Ok(phase)
    }

    fn build_dialog(&self) -> CoreResult<ConfirmDialog> {
        let m = self.messages;
        let close = self.resolver.text(m.close_label)?;

        let submission = Submission::from_form(self.form);
        if submission.values.is_empty() {
            log::debug!("Delete on form {} with nothing checked", self.form.id);
            return Ok(ConfirmDialog::notice(
                self.resolver.text(m.no_selection_title)?,
                self.resolver.text(m.no_selection_body)?,
                close,
            ));
        }

        let joined = submission.values.join(VALUE_SEPARATOR);
        log::debug!("Asking to confirm {} on {}", self.form.action, joined);
        Ok(ConfirmDialog::confirmation(
            self.resolver.text(m.confirm_title)?,
            self.resolver.resolve(m.confirm_body, &[&joined])?,
            self.resolver.text(m.confirm_label)?,
            close,
            submission,
        ))
    }

    /// Confirm action: hide the dialog, then submit its payload.
    ///
    /// A dialog without a payload (the notice) just closes.
    pub fn confirm<H: DialogHost, S: FormSubmit>(
        host: &mut H,
        target: &mut S,
    ) -> CoreResult<SubmitPhase> {
        let Some(submission) = host.hide().and_then(ConfirmDialog::into_confirmed) else {
            return Ok(SubmitPhase::Idle);
        };

        log::info!(
            "Submitting {} on form {}: {}",
            submission.action,
            submission.form_id,
            submission.values.join(VALUE_SEPARATOR)
        );
        target.submit(&submission)?;
        Ok(SubmitPhase::Submitted)
    }

    /// Dismiss action: hide the dialog and do nothing
    pub fn dismiss<H: DialogHost>(host: &mut H) -> SubmitPhase {
        host.hide();
        SubmitPhase::Idle
    }
}
