//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 弹窗、状态栏
//!         mod layout;         // 主布局
//!         mod pages;          // 数据表页面
//!         pub mod theme;      // 主题与样式
//!
//!
//!     屏幕布局：
//!         ┌──────────────────────────────────────────┐
//!         │ 标题栏                                    │
//!         ├──────────────────────────────────────────┤
//!         │ ▾ Jira Software            3 tables, ... │
//!         │     [x] AO_60DB71_RAPIDVIEW    42 rows    │
//!         │     [ ] AO_60DB71_SPRINT      318 rows    │
//!         │ ▸ WebHooks Plugin          1 tables, ... │
//!         ├──────────────────────────────────────────┤
//!         │ 状态栏：快捷键提示 │ 状态消息              │
//!         └──────────────────────────────────────────┘
//!
//!     弹窗（通知 / 确认 / 帮助）最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::message::{AppMessage, ContentMessage};
    use crate::model::test_support::sample_app;
    use crate::model::App;
    use crate::update::update;

    fn draw(app: &App) -> Buffer {
        draw_sized(app, 100, 30)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn contains(buffer: &Buffer, needle: &str) -> bool {
        lines(buffer).iter().any(|line| line.contains(needle))
    }

    #[test]
    fn test_render_collapsed_list() {
        let app = sample_app();
        let buffer = draw(&app);
        assert!(contains(&buffer, "Jira Software"));
        assert!(contains(&buffer, "Unknown plugin"));
        assert!(!contains(&buffer, "AO_60DB71_RAPIDVIEW"));
    }

    #[test]
    fn test_render_expanded_plugin() {
        let mut app = sample_app();
        update(&mut app, AppMessage::Content(ContentMessage::ActivateRow)).unwrap();
        update(&mut app, AppMessage::Content(ContentMessage::SelectNext)).unwrap();
        update(&mut app, AppMessage::Content(ContentMessage::ToggleCheck)).unwrap();

        let buffer = draw(&app);
        assert!(contains(&buffer, "[x] AO_60DB71_RAPIDVIEW"));
        assert!(contains(&buffer, "[ ] AO_60DB71_SPRINT"));
    }

    #[test]
    fn test_render_confirmation_dialog() {
        let mut app = sample_app();
        update(&mut app, AppMessage::Content(ContentMessage::ToggleCheck)).unwrap();
        update(&mut app, AppMessage::Content(ContentMessage::Delete)).unwrap();

        let buffer = draw(&app);
        assert!(contains(&buffer, "Delete tables"));
        assert!(contains(&buffer, " Delete "));
        assert!(contains(&buffer, " Close "));
    }

    #[test]
    fn test_render_help() {
        let mut app = sample_app();
        update(&mut app, AppMessage::ShowHelp).unwrap();
        assert!(contains(&draw(&app), "Switch language"));
    }

    #[test]
    fn test_long_confirmation_keeps_buttons_on_short_screen() {
        let mut app = sample_app();
        for _ in 0..app.tables.groups.len() {
            update(&mut app, AppMessage::Content(ContentMessage::ToggleCheck)).unwrap();
            update(&mut app, AppMessage::Content(ContentMessage::SelectNext)).unwrap();
        }
        update(&mut app, AppMessage::Content(ContentMessage::Delete)).unwrap();

        let buffer = draw_sized(&app, 60, 9);
        assert!(contains(&buffer, "…"));
        assert!(lines(&buffer)
            .iter()
            .any(|line| line.contains(" Delete ") && line.contains(" Close ")));
    }
}
