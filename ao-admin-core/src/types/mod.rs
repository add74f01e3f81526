//! Type definitions

mod form;
mod message;
mod row;
mod table;

pub use form::{Form, SelectableItem, Submission};
pub use message::MessageEntry;
pub use row::{Row, SELECTED_MARKER};
pub use table::{PluginTables, TableInfo};
