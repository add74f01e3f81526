//! 数据表列表更新逻辑

use anyhow::Result;
use ao_admin_core::ConfirmingFormSubmitter;

use crate::i18n::keys;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Result<()> {
    match msg {
        ContentMessage::SelectPrevious => app.tables.select_previous(),
        ContentMessage::SelectNext => app.tables.select_next(),
        ContentMessage::SelectFirst => app.tables.select_first(),
        ContentMessage::SelectLast => app.tables.select_last(),

        ContentMessage::ActivateRow => {
            app.tables.activate_current();
        }

        ContentMessage::ToggleCheck => {
            if app.tables.check_current().is_some() {
                let count = app.tables.checked_count().to_string();
                let status = app.message(keys::STATUS_CHECKED, &[&count])?;
                app.set_status(status);
            }
        }

        ContentMessage::Delete => {
            // 删除键本身从不提交表单，只负责弹出通知或确认弹窗
            ConfirmingFormSubmitter::new(&app.tables.form, &app.resolver, &app.submitter_messages)
                .activate(&mut app.modal)?;
        }
    }

    Ok(())
}
