//! 弹窗/对话框状态
//!
//! `ModalState` 是 core 中 `DialogHost` 的终端实现：
//! 同一时间只显示一个弹窗，按钮焦点由这里维护。

use ao_admin_core::{ConfirmDialog, DialogActionKind, DialogHost};

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 通知 / 确认弹窗
    Dialog {
        dialog: ConfirmDialog,
        /// 当前焦点所在按钮的索引
        focus: usize,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗（只有关闭按钮）
    pub fn show_error(&mut self, title: &str, message: &str, close_label: &str) {
        self.show(ConfirmDialog::notice(title, message, close_label));
    }

    /// 焦点所在按钮的动作
    pub fn focused_action(&self) -> Option<DialogActionKind> {
        let Some(Modal::Dialog { dialog, focus }) = &self.active else {
            return None;
        };
        dialog.actions().get(*focus).map(|a| a.kind)
    }

    /// 焦点移到下一个按钮
    pub fn focus_next(&mut self) {
        if let Some(Modal::Dialog { dialog, focus }) = &mut self.active {
            let len = dialog.actions().len().max(1);
            *focus = (*focus + 1) % len;
        }
    }

    /// 焦点移到上一个按钮
    pub fn focus_prev(&mut self) {
        if let Some(Modal::Dialog { dialog, focus }) = &mut self.active {
            let len = dialog.actions().len().max(1);
            *focus = (*focus + len - 1) % len;
        }
    }
}

impl DialogHost for ModalState {
    /// 显示弹窗，焦点默认落在“关闭/取消”按钮上
    fn show(&mut self, dialog: ConfirmDialog) {
        let focus = dialog
            .actions()
            .iter()
            .position(|a| a.kind == DialogActionKind::Dismiss)
            .unwrap_or(0);
        self.active = Some(Modal::Dialog { dialog, focus });
    }

    fn hide(&mut self) -> Option<ConfirmDialog> {
        match self.active.take()? {
            Modal::Dialog { dialog, .. } => Some(dialog),
            Modal::Help => None,
        }
    }

    fn current(&self) -> Option<&ConfirmDialog> {
        match self.active.as_ref()? {
            Modal::Dialog { dialog, .. } => Some(dialog),
            Modal::Help => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ao_admin_core::Submission;

    fn confirmation() -> ConfirmDialog {
        ConfirmDialog::confirmation(
            "Delete tables",
            "T1",
            "Delete",
            "Close",
            Submission {
                form_id: "ao-tables".to_string(),
                action: "delete".to_string(),
                values: vec!["T1".to_string()],
            },
        )
    }

    #[test]
    fn test_show_focuses_dismiss() {
        let mut modal = ModalState::new();
        modal.show(confirmation());
        assert_eq!(modal.focused_action(), Some(DialogActionKind::Dismiss));
    }

    #[test]
    fn test_focus_wraps() {
        let mut modal = ModalState::new();
        modal.show(confirmation());
        modal.focus_next();
        assert_eq!(modal.focused_action(), Some(DialogActionKind::Confirm));
        modal.focus_next();
        assert_eq!(modal.focused_action(), Some(DialogActionKind::Dismiss));
        modal.focus_prev();
        assert_eq!(modal.focused_action(), Some(DialogActionKind::Confirm));
    }

    #[test]
    fn test_hide_returns_dialog_once() {
        let mut modal = ModalState::new();
        modal.show(confirmation());
        assert!(modal.hide().is_some());
        assert!(modal.hide().is_none());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_help_is_not_a_dialog() {
        let mut modal = ModalState::new();
        modal.show_help();
        assert!(modal.is_open());
        assert!(modal.current().is_none());
        assert!(modal.hide().is_none());
        assert!(!modal.is_open());
    }
}
