//! 数据表页面状态
//!
//! 列表由两种条目组成：插件行（`Row`，可展开）和数据表行（表单中的可勾选项）。
//! 插件行被选中时展开，显示其下的数据表。

use std::collections::HashSet;

use ao_admin_core::{Form, PluginTables, SelectableItem, SelectionToggle, TableInfo};

use crate::backend::{DELETE_ACTION, TABLES_FORM_ID};

/// 列表中可见的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry {
    /// 插件行
    Plugin { group: usize },
    /// 数据表行
    Table { group: usize, table: usize },
}

/// 数据表页面状态
#[derive(Debug)]
pub struct TablesState {
    /// 按插件分组的数据表
    pub groups: Vec<PluginTables>,
    /// 删除表单，每张表对应一个可勾选项
    pub form: Form,
    /// 光标在可见条目中的位置
    pub cursor: usize,
}

impl Default for TablesState {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            form: Form::new(TABLES_FORM_ID, DELETE_ACTION),
            cursor: 0,
        }
    }
}

impl TablesState {
    /// 创建新的数据表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置数据表列表
    ///
    /// 仍然存在的插件保持展开状态，仍然存在的表保持勾选状态。
    pub fn set_tables(&mut self, tables: Vec<TableInfo>) {
        let expanded: HashSet<Option<String>> = self
            .groups
            .iter()
            .filter(|g| g.row.is_selected())
            .map(|g| g.plugin.clone())
            .collect();
        let checked: HashSet<String> = self.form.checked_values().into_iter().collect();

        self.groups = PluginTables::group(tables);
        for group in &mut self.groups {
            if expanded.contains(&group.plugin) {
                SelectionToggle::new(&mut group.row).activate();
            }
        }

        self.form.items = self
            .groups
            .iter()
            .flat_map(|g| g.tables.iter())
            .map(|t| SelectableItem {
                value: t.table.clone(),
                checked: checked.contains(&t.table),
            })
            .collect();

        self.clamp_cursor();
    }

    /// 当前可见的条目
    pub fn entries(&self) -> Vec<ListEntry> {
        let mut entries = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            entries.push(ListEntry::Plugin { group: g });
            if group.row.is_selected() {
                entries.extend((0..group.tables.len()).map(|t| ListEntry::Table { group: g, table: t }));
            }
        }
        entries
    }

    /// 光标所在条目
    pub fn current(&self) -> Option<ListEntry> {
        self.entries().get(self.cursor).copied()
    }

    pub fn table(&self, group: usize, table: usize) -> Option<&TableInfo> {
        self.groups.get(group)?.tables.get(table)
    }

    pub fn is_checked(&self, table: &str) -> bool {
        self.form.item(table).is_some_and(|item| item.checked)
    }

    pub fn checked_count(&self) -> usize {
        self.form.checked_items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.entries().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.cursor = self.entries().len().saturating_sub(1);
    }

    /// 激活当前条目：插件行切换展开，数据表行切换勾选
    pub fn activate_current(&mut self) -> Option<bool> {
        match self.current()? {
            ListEntry::Plugin { group } => {
                let row = &mut self.groups.get_mut(group)?.row;
                let selected = SelectionToggle::new(row).activate();
                self.clamp_cursor();
                Some(selected)
            }
            ListEntry::Table { group, table } => self.toggle_table(group, table),
        }
    }

    /// 勾选当前条目：数据表行切换勾选；插件行勾选其全部数据表，已全部勾选时则全部取消
    pub fn check_current(&mut self) -> Option<bool> {
        match self.current()? {
            ListEntry::Table { group, table } => self.toggle_table(group, table),
            ListEntry::Plugin { group } => {
                let names: Vec<String> = self
                    .groups
                    .get(group)?
                    .tables
                    .iter()
                    .map(|t| t.table.clone())
                    .collect();
                let check = !names.iter().all(|n| self.is_checked(n));
                for name in &names {
                    if let Some(item) = self.form.item_mut(name) {
                        item.checked = check;
                    }
                }
                Some(check)
            }
        }
    }

    fn toggle_table(&mut self, group: usize, table: usize) -> Option<bool> {
        let name = self.table(group, table)?.table.clone();
        self.form.toggle_item(&name)
    }

    fn clamp_cursor(&mut self) {
        let len = self.entries().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::sample_tables;

    fn state() -> TablesState {
        let mut state = TablesState::new();
        state.set_tables(sample_tables());
        state
    }

    #[test]
    fn test_groups_start_collapsed() {
        let state = state();
        assert_eq!(state.entries().len(), state.groups.len());
        assert_eq!(state.form.items.len(), sample_tables().len());
    }

    #[test]
    fn test_activate_plugin_twice_restores_collapse() {
        let mut state = state();
        let collapsed = state.entries().len();

        assert_eq!(state.activate_current(), Some(true));
        assert_eq!(state.entries().len(), collapsed + state.groups[0].tables.len());

        assert_eq!(state.activate_current(), Some(false));
        assert_eq!(state.entries().len(), collapsed);
    }

    #[test]
    fn test_check_table_and_whole_plugin() {
        let mut state = state();
        state.activate_current();
        state.select_next();
        assert_eq!(
            state.current(),
            Some(ListEntry::Table { group: 0, table: 0 })
        );
        assert_eq!(state.check_current(), Some(true));
        assert_eq!(state.checked_count(), 1);

        state.select_first();
        assert_eq!(state.check_current(), Some(true));
        assert_eq!(state.checked_count(), state.groups[0].tables.len());
        assert_eq!(state.check_current(), Some(false));
        assert_eq!(state.checked_count(), 0);
    }

    #[test]
    fn test_set_tables_keeps_expansion_and_checks() {
        let mut state = state();
        state.activate_current();
        state.check_current();
        let kept = state.form.checked_values();

        let mut tables = sample_tables();
        tables.retain(|t| t.table != "AO_60DB71_SPRINT");
        state.set_tables(tables);

        assert!(state.groups[0].row.is_selected());
        assert_eq!(state.checked_count(), kept.len() - 1);
        assert!(!state.is_checked("AO_60DB71_SPRINT"));
    }

    #[test]
    fn test_cursor_clamped_after_collapse() {
        let mut state = state();
        state.activate_current();
        state.select_last();
        state.set_tables(vec![TableInfo::new(Some("Solo"), "AO_1_ONLY", Some(1))]);
        assert_eq!(state.cursor, 0);
        assert!(state.current().is_some());
    }
}
