//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::keys;
use crate::model::{App, ListEntry};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, String)> {
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Tab/←→", app.display_text(keys::HINT_SWITCH)));
        hints.push(("Enter", app.display_text(keys::HINT_SELECT)));
        hints.push(("Esc", app.display_text(keys::DIALOG_CLOSE)));
        return hints;
    }

    hints.push(("↑↓", app.display_text(keys::HINT_MOVE)));
    match app.tables.current() {
        Some(ListEntry::Plugin { .. }) => {
            hints.push(("Enter", app.display_text(keys::HINT_EXPAND)));
            hints.push(("Space", app.display_text(keys::HINT_CHECK)));
        }
        Some(ListEntry::Table { .. }) => {
            hints.push(("Space", app.display_text(keys::HINT_CHECK)));
        }
        None => {}
    }
    hints.push(("d", app.display_text(keys::HINT_DELETE)));
    hints.push(("?", app.display_text(keys::HINT_HELP)));
    hints.push(("q", app.display_text(keys::HINT_QUIT)));

    hints
}
