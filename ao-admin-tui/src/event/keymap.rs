//! 快捷键配置
//!
//! 定义默认快捷键映射

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键和 BackTab 忽略 Shift，终端对 `?` 之类的按键会附带 Shift 修饰。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const CLEAR_STATUS: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 导航
    pub const NAV_UP: KeyBinding = KeyBinding::key(KeyCode::Up);
    pub const NAV_UP_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('k'));
    pub const NAV_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down);
    pub const NAV_DOWN_VIM: KeyBinding = KeyBinding::key(KeyCode::Char('j'));
    pub const NAV_FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const NAV_LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const NAV_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 操作
    pub const ACTION_CHECK: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_DELETE_KEY: KeyBinding = KeyBinding::key(KeyCode::Delete);
    pub const ACTION_DELETE_SHORT: KeyBinding = KeyBinding::key(KeyCode::Char('d'));

    // 弹窗
    pub const DIALOG_CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const DIALOG_NO: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const DIALOG_YES: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const DIALOG_SUBMIT: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const DIALOG_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const DIALOG_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);
    pub const DIALOG_PREV: KeyBinding = KeyBinding::key(KeyCode::BackTab);
    pub const DIALOG_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_binding_ignores_shift() {
        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert!(DefaultKeymap::HELP.matches(&key));
    }

    #[test]
    fn test_modifier_must_match() {
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::ALT);
        assert!(DefaultKeymap::ACTION_DELETE.matches(&key));
        assert!(!DefaultKeymap::ACTION_DELETE_SHORT.matches(&key));
    }
}
