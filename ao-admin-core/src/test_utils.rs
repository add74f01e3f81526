//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use crate::dialog::{ConfirmDialog, DialogHost};
use crate::error::{CoreError, CoreResult};
use crate::message::{MessageCatalog, MessageResolver};
use crate::submitter::FormSubmit;
use crate::types::Submission;

// ===== MockDialogHost =====

#[derive(Default)]
pub struct MockDialogHost {
    /// 按顺序记录每次 show 的弹窗
    pub shown: Vec<ConfirmDialog>,
    active: Option<ConfirmDialog>,
}

impl DialogHost for MockDialogHost {
    fn show(&mut self, dialog: ConfirmDialog) {
        self.shown.push(dialog.clone());
        self.active = Some(dialog);
    }

    fn hide(&mut self) -> Option<ConfirmDialog> {
        self.active.take()
    }

    fn current(&self) -> Option<&ConfirmDialog> {
        self.active.as_ref()
    }
}

// ===== MockFormSubmit =====

#[derive(Default)]
pub struct MockFormSubmit {
    pub submitted: Vec<Submission>,
    /// 如果 Some，submit 时返回此错误
    fail_with: Option<String>,
}

impl MockFormSubmit {
    pub fn failing(msg: &str) -> Self {
        Self {
            submitted: Vec::new(),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl FormSubmit for MockFormSubmit {
    fn submit(&mut self, submission: &Submission) -> CoreResult<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(CoreError::SubmitFailed(msg.clone()));
        }
        self.submitted.push(submission.clone());
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 包含删除确认流程所需全部 key 的 resolver
pub fn resolver_with_defaults() -> MessageResolver {
    MessageResolver::new(MessageCatalog::from_entries([
        ("ao.admin.tables.delete.none.title", "Nothing selected"),
        (
            "ao.admin.tables.delete.none.body",
            "Select at least one table to delete.",
        ),
        ("ao.admin.tables.delete.confirm.title", "Delete tables"),
        (
            "ao.admin.tables.delete.confirm.body",
            "Delete the following tables and all their data: {0}?",
        ),
        ("ao.admin.tables.delete.confirm.action", "Delete"),
        ("ao.admin.dialog.close", "Close"),
    ]))
}
