//! 弹窗更新逻辑

use anyhow::Result;
use ao_admin_core::{ConfirmingFormSubmitter, DialogActionKind, DialogHost, SubmitPhase};

use crate::i18n::keys;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Result<()> {
    match app.modal.active {
        None => Ok(()),
        Some(Modal::Help) => {
            handle_help(app, msg);
            Ok(())
        }
        Some(Modal::Dialog { .. }) => handle_dialog(app, msg),
    }
}

/// 帮助弹窗：任意确认/关闭键都会关闭
fn handle_help(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Submit | ModalMessage::Confirm => app.modal.close(),
        ModalMessage::NextAction | ModalMessage::PrevAction => {}
    }
}

/// 通知 / 确认弹窗
fn handle_dialog(app: &mut App, msg: ModalMessage) -> Result<()> {
    match msg {
        ModalMessage::Close => {
            ConfirmingFormSubmitter::dismiss(&mut app.modal);
        }

        ModalMessage::NextAction => app.modal.focus_next(),
        ModalMessage::PrevAction => app.modal.focus_prev(),

        ModalMessage::Submit => match app.modal.focused_action() {
            Some(DialogActionKind::Confirm) => confirm(app)?,
            _ => {
                ConfirmingFormSubmitter::dismiss(&mut app.modal);
            }
        },

        ModalMessage::Confirm => {
            // 通知弹窗没有确认按钮，y 不起作用
            if app.modal.current().is_some_and(|d| d.has_confirm()) {
                confirm(app)?;
            }
        }
    }

    Ok(())
}

/// 确认删除：弹窗先隐藏，再把表单提交给数据表服务
fn confirm(app: &mut App) -> Result<()> {
    let values = app
        .modal
        .current()
        .and_then(|d| d.pending())
        .map(|s| s.values.clone())
        .unwrap_or_default();

    match ConfirmingFormSubmitter::confirm(&mut app.modal, &mut app.service) {
        Ok(SubmitPhase::Submitted) => {
            app.tables.form.clear_checked();
            if let Err(e) = app.reload_tables() {
                log::error!("Reloading tables after delete failed: {e}");
            }
            let count = values.len().to_string();
            let names = values.join(", ");
            let status = app.message(keys::DELETE_DONE, &[&count, &names])?;
            app.set_status(status);
        }
        Ok(_) => {}
        Err(e) if e.is_fatal() => return Err(e.into()),
        Err(e) => {
            let title = app.text(keys::DELETE_FAILED_TITLE)?;
            let close = app.text(keys::DIALOG_CLOSE)?;
            app.modal.show_error(&title, &e.to_string(), &close);
            if let Err(e) = app.reload_tables() {
                log::error!("Reloading tables after failed delete failed: {e}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::{AppMessage, ContentMessage};
    use crate::model::test_support::sample_app;
    use ao_admin_core::{FormSubmit, Submission};

    fn send(app: &mut App, msg: AppMessage) {
        crate::update::update(app, msg).unwrap();
    }

    fn content(app: &mut App, msg: ContentMessage) {
        send(app, AppMessage::Content(msg));
    }

    fn modal(app: &mut App, msg: ModalMessage) {
        send(app, AppMessage::Modal(msg));
    }

    fn table_count(app: &App) -> usize {
        app.service.list().unwrap().len()
    }

    /// 展开 Jira Software 并勾选前两张表
    fn check_rapidview_and_sprint(app: &mut App) {
        content(app, ContentMessage::ActivateRow);
        content(app, ContentMessage::SelectNext);
        content(app, ContentMessage::ToggleCheck);
        content(app, ContentMessage::SelectNext);
        content(app, ContentMessage::ToggleCheck);
    }

    #[test]
    fn test_empty_selection_shows_notice() {
        let mut app = sample_app();
        content(&mut app, ContentMessage::Delete);

        let dialog = app.modal.current().unwrap();
        assert_eq!(dialog.title(), "Nothing selected");
        assert!(!dialog.has_confirm());
        assert_eq!(dialog.actions().len(), 1);

        modal(&mut app, ModalMessage::Confirm);
        assert!(app.modal.is_open());

        modal(&mut app, ModalMessage::Submit);
        assert!(!app.modal.is_open());
        assert_eq!(table_count(&app), 9);
    }

    #[test]
    fn test_confirmation_lists_checked_tables() {
        let mut app = sample_app();
        check_rapidview_and_sprint(&mut app);
        content(&mut app, ContentMessage::Delete);

        let dialog = app.modal.current().unwrap();
        assert!(dialog.has_confirm());
        assert!(dialog
            .body()
            .contains("AO_60DB71_RAPIDVIEW, AO_60DB71_SPRINT"));
        assert_eq!(table_count(&app), 9);
    }

    #[test]
    fn test_dismiss_deletes_nothing() {
        let mut app = sample_app();
        check_rapidview_and_sprint(&mut app);
        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::Close);

        assert!(!app.modal.is_open());
        assert_eq!(table_count(&app), 9);
        assert_eq!(app.tables.checked_count(), 2);
    }

    #[test]
    fn test_submit_on_default_focus_dismisses() {
        let mut app = sample_app();
        check_rapidview_and_sprint(&mut app);
        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::Submit);

        assert!(!app.modal.is_open());
        assert_eq!(table_count(&app), 9);
    }

    #[test]
    fn test_focus_confirm_then_submit_deletes() {
        let mut app = sample_app();
        check_rapidview_and_sprint(&mut app);
        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::PrevAction);
        modal(&mut app, ModalMessage::Submit);

        assert!(!app.modal.is_open());
        assert_eq!(table_count(&app), 7);
        assert_eq!(app.tables.checked_count(), 0);
        assert!(app
            .status_message
            .unwrap()
            .ends_with("Deleted 2 table(s): AO_60DB71_RAPIDVIEW, AO_60DB71_SPRINT"));
    }

    #[test]
    fn test_confirm_key_deletes_once() {
        let mut app = sample_app();
        check_rapidview_and_sprint(&mut app);
        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::Confirm);
        assert_eq!(table_count(&app), 7);

        // 弹窗已关闭，再次确认不会重复提交
        modal(&mut app, ModalMessage::Confirm);
        assert_eq!(table_count(&app), 7);
    }

    #[test]
    fn test_failed_submit_shows_error() {
        let mut app = sample_app();
        check_rapidview_and_sprint(&mut app);
        content(&mut app, ContentMessage::Delete);

        // 表在弹窗打开期间被其他人删除
        let stale = Submission {
            form_id: crate::backend::TABLES_FORM_ID.to_string(),
            action: crate::backend::DELETE_ACTION.to_string(),
            values: vec!["AO_60DB71_SPRINT".to_string()],
        };
        app.service.submit(&stale).unwrap();

        modal(&mut app, ModalMessage::Confirm);

        let dialog = app.modal.current().unwrap();
        assert_eq!(dialog.title(), "Delete failed");
        assert!(dialog.body().contains("AO_60DB71_SPRINT"));
        assert!(!dialog.has_confirm());
        assert_eq!(table_count(&app), 8);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = sample_app();
        send(&mut app, AppMessage::ShowHelp);
        modal(&mut app, ModalMessage::NextAction);
        assert!(app.modal.is_open());
        modal(&mut app, ModalMessage::Submit);
        assert!(!app.modal.is_open());
    }
}
