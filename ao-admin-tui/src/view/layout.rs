//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::keys;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}  [{}]",
        app.display_text(keys::APP_TITLE),
        env!("CARGO_PKG_VERSION"),
        app.language.display_name()
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染数据表页面
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", app.display_text(keys::TABLES_TITLE)))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::tables::render(app, frame, inner_area);
}
