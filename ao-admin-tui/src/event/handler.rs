//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;




/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}




/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                        // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
        || DefaultKeymap::ALT_QUIT.matches(&key)
    {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }

    if DefaultKeymap::CLEAR_STATUS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    handle_table_keys(key)
}

/// 处理数据表列表的按键
fn handle_table_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::NAV_UP.matches(&key) || DefaultKeymap::NAV_UP_VIM.matches(&key) {
        ContentMessage::SelectPrevious
    } else if DefaultKeymap::NAV_DOWN.matches(&key) || DefaultKeymap::NAV_DOWN_VIM.matches(&key) {
        ContentMessage::SelectNext
    } else if DefaultKeymap::NAV_FIRST.matches(&key) {
        ContentMessage::SelectFirst
    } else if DefaultKeymap::NAV_LAST.matches(&key) {
        ContentMessage::SelectLast
    } else if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        ContentMessage::ActivateRow
    } else if DefaultKeymap::ACTION_CHECK.matches(&key) {
        ContentMessage::ToggleCheck
    } else if DefaultKeymap::ACTION_DELETE.matches(&key)
        || DefaultKeymap::ACTION_DELETE_KEY.matches(&key)
        || DefaultKeymap::ACTION_DELETE_SHORT.matches(&key)
    {
        ContentMessage::Delete
    } else {
        return AppMessage::Noop;
    };

    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::DIALOG_CLOSE.matches(&key)
        || DefaultKeymap::DIALOG_NO.matches(&key)
        || DefaultKeymap::FORCE_QUIT.matches(&key)
    {
        ModalMessage::Close
    } else if DefaultKeymap::DIALOG_YES.matches(&key) {
        ModalMessage::Confirm
    } else if DefaultKeymap::DIALOG_SUBMIT.matches(&key) {
        ModalMessage::Submit
    } else if DefaultKeymap::DIALOG_NEXT.matches(&key) || DefaultKeymap::DIALOG_RIGHT.matches(&key) {
        ModalMessage::NextAction
    } else if DefaultKeymap::DIALOG_PREV.matches(&key) || DefaultKeymap::DIALOG_LEFT.matches(&key) {
        ModalMessage::PrevAction
    } else {
        return AppMessage::Noop;
    };

    AppMessage::Modal(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::sample_app;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_table_keys() {
        let app = sample_app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::ActivateRow)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char(' '), KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::ToggleCheck)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Delete, KeyModifiers::NONE), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('l'), KeyModifiers::ALT), &app),
            AppMessage::CycleLanguage
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn test_modal_keys_take_priority() {
        let mut app = sample_app();
        app.modal.show_help();

        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('y'), KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Left, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::PrevAction)
        ));
    }

    #[test]
    fn test_release_is_ignored() {
        let app = sample_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
