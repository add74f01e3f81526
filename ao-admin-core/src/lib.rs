//! Active Objects Table Admin Core Library
//!
//! Provides the interaction components behind the table admin page:
//! - Row selection toggling (`SelectionToggle`)
//! - Localized, parameterized messages (`MessageResolver`)
//! - Delete confirmation before a form is submitted (`ConfirmingFormSubmitter`)
//!
//! The library does not render anything. Dialogs are shown through the
//! `DialogHost` trait and submissions are delivered through `FormSubmit`,
//! so any front end (terminal, web) can host the components.

pub mod dialog;
pub mod error;
pub mod message;
pub mod selection;
pub mod submitter;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use dialog::{ConfirmDialog, DialogAction, DialogActionKind, DialogHost};
pub use error::{CoreError, CoreResult};
pub use message::{format_message, MessageCatalog, MessageResolver};
pub use selection::SelectionToggle;
pub use submitter::{ConfirmingFormSubmitter, FormSubmit, SubmitPhase, SubmitterMessages};
pub use types::{Form, MessageEntry, PluginTables, Row, SelectableItem, Submission, TableInfo};
