//! 应用主状态结构

use std::path::PathBuf;

use anyhow::Result;
use ao_admin_core::{CoreResult, MessageResolver, SubmitterMessages};
use chrono::Local;

use super::{ModalState, TablesState};
use crate::backend::TableService;
use crate::i18n::{self, keys, Language};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前语言
    pub language: Language,

    /// 消息覆盖文件目录
    pub messages_dir: Option<PathBuf>,

    /// 当前语言的消息
    pub resolver: MessageResolver,

    /// 删除确认流程使用的消息 key
    pub submitter_messages: SubmitterMessages,

    /// 数据表页面状态
    pub tables: TablesState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 数据表服务（表单提交目标）
    pub service: TableService,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 消息 key 在这里一次性校验，缺失时直接失败。
    pub fn new(
        language: Language,
        messages_dir: Option<PathBuf>,
        service: TableService,
    ) -> Result<Self> {
        let resolver = i18n::build_resolver(language, messages_dir.as_deref())?;

        let mut app = Self {
            should_quit: false,
            status_message: None,
            language,
            messages_dir,
            resolver,
            submitter_messages: SubmitterMessages::default(),
            tables: TablesState::new(),
            modal: ModalState::new(),
            service,
        };

        app.reload_tables()?;
        Ok(app)
    }

    /// 获取无参数消息；key 缺失时返回 `MissingMessageKey`
    pub fn text(&self, key: &str) -> CoreResult<String> {
        self.resolver.text(key)
    }

    /// 获取带参数消息；key 缺失时返回 `MissingMessageKey`
    pub fn message(&self, key: &str, args: &[&str]) -> CoreResult<String> {
        self.resolver.resolve(key, args)
    }

    /// 渲染用的无参数文本
    ///
    /// View 层无法返回错误：key 缺失时显示 key 本身。
    /// 所有 key 已在构建 resolver 时校验，Update 层一律使用 `text`。
    pub fn display_text(&self, key: &str) -> String {
        self.display_message(key, &[])
    }

    /// 渲染用的带参数文本，key 缺失时显示 key 本身
    pub fn display_message(&self, key: &str, args: &[&str]) -> String {
        self.message(key, args).unwrap_or_else(|_| key.to_string())
    }

    /// 从服务重新加载数据表，返回表数量
    pub fn reload_tables(&mut self) -> CoreResult<usize> {
        let tables = self.service.list()?;
        let count = tables.len();
        self.tables.set_tables(tables);
        Ok(count)
    }

    /// 切换语言
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.resolver = i18n::build_resolver(language, self.messages_dir.as_deref())?;
        self.language = language;
        log::info!("Language switched to {}", language.code());
        Ok(())
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        let now = Local::now().format("%H:%M:%S");
        self.status_message = Some(format!("[{now}] {}", message.into()));
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 插件的显示名称，未知插件使用本地化文本
    pub fn plugin_label(&self, plugin: Option<&str>) -> String {
        plugin.map_or_else(|| self.display_text(keys::PLUGIN_UNKNOWN), str::to_string)
    }

    /// 行数的显示文本
    pub fn rows_label(&self, rows: Option<u64>) -> String {
        match rows {
            Some(n) => self.display_message(keys::TABLES_ROW_COUNT, &[&n.to_string()]),
            None => self.display_text(keys::ROWS_UNKNOWN),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::backend::{sample_tables, InMemoryTableRepository};

    /// 使用内置示例数据的应用实例
    #[allow(clippy::unwrap_used)]
    pub fn sample_app() -> App {
        let service = TableService::new(Box::new(InMemoryTableRepository::new(sample_tables())));
        App::new(Language::EnUs, None, service).unwrap()
    }

    /// 英文消息中去掉以 `prefix` 开头的 key 后得到的 resolver
    #[allow(clippy::unwrap_used)]
    pub fn resolver_without(prefix: &str) -> MessageResolver {
        let full = i18n::load_catalog(Language::EnUs, None).unwrap();
        MessageResolver::new(ao_admin_core::MessageCatalog::from_entries(
            keys::ALL
                .iter()
                .filter(|key| !key.starts_with(prefix))
                .map(|key| (*key, full.get(key).unwrap())),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::test_support::{resolver_without, sample_app};
    use super::*;
    use ao_admin_core::CoreError;

    #[test]
    fn test_text_reports_missing_key() {
        let mut app = sample_app();
        app.resolver = resolver_without(keys::STATUS_CHECKED);

        let err = app.message(keys::STATUS_CHECKED, &["1"]).unwrap_err();
        assert!(matches!(err, CoreError::MissingMessageKey(ref k) if k == keys::STATUS_CHECKED));
        assert_eq!(app.text(keys::TABLES_TITLE).unwrap(), "Tables");
    }

    #[test]
    fn test_display_text_falls_back_to_key() {
        let mut app = sample_app();
        app.resolver = resolver_without(keys::ROWS_UNKNOWN);

        assert_eq!(app.rows_label(None), keys::ROWS_UNKNOWN);
        assert_eq!(app.rows_label(Some(3)), "3 rows");
    }
}
