//! 数据表服务
//!
//! 表单提交的接收方：确认删除后，由这里真正删除数据表。

use ao_admin_core::{CoreError, CoreResult, FormSubmit, Submission, TableInfo};

use super::TableRepository;

/// 数据表表单 ID
pub const TABLES_FORM_ID: &str = "ao-tables";

/// 删除动作
pub const DELETE_ACTION: &str = "delete";

/// 数据表服务
pub struct TableService {
    repository: Box<dyn TableRepository>,
}

impl TableService {
    pub fn new(repository: Box<dyn TableRepository>) -> Self {
        Self { repository }
    }

    /// 列出全部数据表
    pub fn list(&self) -> CoreResult<Vec<TableInfo>> {
        self.repository.find_all()
    }
}

impl FormSubmit for TableService {
    fn submit(&mut self, submission: &Submission) -> CoreResult<()> {
        if submission.form_id != TABLES_FORM_ID || submission.action != DELETE_ACTION {
            return Err(CoreError::SubmitFailed(format!(
                "unsupported action {} on form {}",
                submission.action, submission.form_id
            )));
        }

        self.repository.delete(&submission.values).inspect_err(|e| {
            if e.is_expected() {
                log::warn!("Delete rejected: {e}");
            } else {
                log::error!("Delete failed: {e}");
            }
        })?;

        log::info!("Deleted tables: {}", submission.values.join(", "));
        Ok(())
    }
}
