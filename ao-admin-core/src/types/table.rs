//! Table listing types

use serde::{Deserialize, Serialize};

use super::Row;

/// One Active Objects table as listed on the admin page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Owning plugin name; `None` when the plugin could not be identified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    /// Table name
    pub table: String,
    /// Row count; `None` when the count could not be read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u64>,
}

impl TableInfo {
    pub fn new(plugin: Option<&str>, table: impl Into<String>, rows: Option<u64>) -> Self {
        Self {
            plugin: plugin.map(str::to_string),
            table: table.into(),
            rows,
        }
    }
}

/// Tables grouped under the plugin that owns them.
///
/// The group's list entry is a [`Row`]; its tables are the checkable items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginTables {
    pub row: Row,
    pub plugin: Option<String>,
    pub tables: Vec<TableInfo>,
}

impl PluginTables {
    /// Group tables by plugin.
    ///
    /// Groups keep the order in which their plugin first appears; tables of
    /// unknown plugins are collected into one trailing group.
    pub fn group(tables: impl IntoIterator<Item = TableInfo>) -> Vec<Self> {
        let mut groups: Vec<Self> = Vec::new();
        let mut unknown: Vec<TableInfo> = Vec::new();

        for table in tables {
            let Some(plugin) = table.plugin.clone() else {
                unknown.push(table);
                continue;
            };
            match groups
                .iter_mut()
                .find(|g| g.plugin.as_deref() == Some(plugin.as_str()))
            {
                Some(group) => group.tables.push(table),
                None => groups.push(Self {
                    row: Row::new(),
                    plugin: Some(plugin),
                    tables: vec![table],
                }),
            }
        }

        if !unknown.is_empty() {
            groups.push(Self {
                row: Row::new(),
                plugin: None,
                tables: unknown,
            });
        }

        groups
    }

    /// Sum of known row counts
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().filter_map(|t| t.rows).sum()
    }
}
