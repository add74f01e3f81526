//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 数据表列表子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Result<()> {...}
//!
//!
//!     返回值：
//!         - Ok(())                  正常处理（可恢复的错误已转为错误弹窗或状态栏消息）
//!         - Err(MissingMessageKey)  消息 key 缺失，属于致命错误，主循环随之退出
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 删除流程
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     content.rs：ContentMessage::Delete
//!         → ConfirmingFormSubmitter::activate(&mut app.modal)
//!         → 未勾选：通知弹窗（仅“关闭”）；已勾选：确认弹窗（“删除” + “关闭”）
//!
//!     modal.rs：ModalMessage::Submit / Confirm / Close
//!         → 确认：先隐藏弹窗，再提交表单给 TableService
//!         → 关闭：隐藏弹窗，什么也不做
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use anyhow::Result;
use ao_admin_core::CoreError;

use crate::i18n::keys;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Result<()> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg)?;
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg)?;
        }

        AppMessage::Refresh => match app.reload_tables() {
            Ok(count) => {
                let status = app.message(keys::STATUS_RELOADED, &[&count.to_string()])?;
                app.set_status(status);
            }
            Err(e) => {
                log::error!("Reloading tables failed: {e}");
                let status = app.text(keys::STATUS_RELOAD_FAILED)?;
                app.set_status(status);
            }
        },

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::CycleLanguage => {
            let next = app.language.next();
            match app.set_language(next) {
                Ok(()) => {
                    let status = app.message(keys::STATUS_LANGUAGE, &[next.display_name()])?;
                    app.set_status(status);
                }
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => {
                    log::error!("Switching language failed: {e:#}");
                    let (title, close) = (app.text(keys::ERROR_TITLE)?, app.text(keys::DIALOG_CLOSE)?);
                    app.modal.show_error(&title, &format!("{e:#}"), &close);
                }
            }
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    Ok(())
}

/// 是否为必须中止主循环的错误
fn is_fatal(e: &anyhow::Error) -> bool {
    e.downcast_ref::<CoreError>().is_some_and(CoreError::is_fatal)
}
