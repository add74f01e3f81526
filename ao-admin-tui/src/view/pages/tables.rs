//! 数据表页面视图

use ao_admin_core::{PluginTables, TableInfo};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::keys;
use crate::model::{App, ListEntry};
use crate::view::theme::{colors, Styles};

/// 渲染数据表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.tables.is_empty() {
        render_empty(app, frame, area);
    } else {
        render_list(app, frame, area);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", app.display_text(keys::TABLES_EMPTY)),
            Style::default().fg(Color::Gray),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染插件 / 数据表列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .tables
        .entries()
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let is_cursor = i == app.tables.cursor;
            let line = match entry {
                ListEntry::Plugin { group } => {
                    plugin_line(app, app.tables.groups.get(group)?, is_cursor)
                }
                ListEntry::Table { group, table } => {
                    table_line(app, app.tables.table(group, table)?, is_cursor)
                }
            };
            Some(ListItem::new(line))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.tables.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 插件行：带选中标记时高亮并展开
fn plugin_line<'a>(app: &App, group: &'a PluginTables, is_cursor: bool) -> Line<'a> {
    let c = colors();
    let marked = group.row.marker().is_some();

    let name_style = match (is_cursor, marked) {
        (true, _) => Styles::selected(),
        (false, true) => Styles::marked(),
        (false, false) => Style::default().fg(c.fg),
    };
    let dim_style = if is_cursor {
        Styles::selected()
    } else {
        Style::default().fg(c.muted)
    };

    let summary = app.display_message(
        keys::TABLES_PLUGIN_SUMMARY,
        &[&group.tables.len().to_string(), &group.total_rows().to_string()],
    );

    Line::from(vec![
        Span::styled(if marked { " ▾ " } else { " ▸ " }, name_style),
        Span::styled(app.plugin_label(group.plugin.as_deref()), name_style),
        Span::styled(format!("  ({summary})"), dim_style),
    ])
}

/// 数据表行：复选框 + 表名 + 行数
fn table_line<'a>(app: &App, table: &'a TableInfo, is_cursor: bool) -> Line<'a> {
    let c = colors();
    let checked = app.tables.is_checked(&table.table);

    let (name_style, dim_style) = if is_cursor {
        (Styles::selected(), Styles::selected())
    } else {
        (Style::default().fg(c.fg), Style::default().fg(c.muted))
    };
    let box_style = if is_cursor {
        Styles::selected()
    } else if checked {
        Style::default().fg(c.warning)
    } else {
        Style::default().fg(c.muted)
    };

    Line::from(vec![
        Span::raw("     "),
        Span::styled(if checked { "[x]" } else { "[ ]" }, box_style),
        Span::styled(" ", name_style),
        Span::styled(table.table.as_str(), name_style),
        Span::styled(format!("  {}", app.rows_label(table.rows)), dim_style),
    ])
}
