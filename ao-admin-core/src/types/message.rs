//! Message entry type

use serde::{Deserialize, Serialize};

/// A localized template keyed by message id.
///
/// Templates may contain positional placeholders (`{0}`, `{1}`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    /// Message id, e.g. `ao.admin.tables.delete.confirm.body`
    pub key: String,
    /// Template text
    pub template: String,
}

impl MessageEntry {
    pub fn new(key: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            template: template.into(),
        }
    }
}

impl<K: Into<String>, T: Into<String>> From<(K, T)> for MessageEntry {
    fn from((key, template): (K, T)) -> Self {
        Self::new(key, template)
    }
}
