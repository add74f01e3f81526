//! 翻译键定义
//!
//! 所有消息 key 集中定义在这里，bundle 与代码通过这些常量对齐。
//!
//! ## 分类标准
//!
//! 1. **页面内容归 `ao.admin.tables.*`**：表格列表页面
//! 2. **弹窗内容归 `ao.admin.dialog.*` / `ao.admin.tables.delete.*`**
//! 3. **键盘提示归 `ao.admin.hint.*`**：按键名称和操作提示
//! 4. **帮助弹窗归 `ao.admin.help.*`**

// ============================================================================
// 通用文本
// ============================================================================

pub const APP_TITLE: &str = "ao.admin.title";
pub const PLUGIN_UNKNOWN: &str = "ao.admin.plugin.unknown";
pub const ROWS_UNKNOWN: &str = "ao.admin.rows.unknown";

// ============================================================================
// 表格页面
// ============================================================================

pub const TABLES_TITLE: &str = "ao.admin.tables.title";
pub const TABLES_EMPTY: &str = "ao.admin.tables.empty";
/// `{0}` = 行数
pub const TABLES_ROW_COUNT: &str = "ao.admin.tables.rows";
/// `{0}` = 表数量, `{1}` = 总行数
pub const TABLES_PLUGIN_SUMMARY: &str = "ao.admin.tables.plugin.summary";

// ============================================================================
// 删除流程
// ============================================================================

pub const DELETE_NONE_TITLE: &str = "ao.admin.tables.delete.none.title";
pub const DELETE_NONE_BODY: &str = "ao.admin.tables.delete.none.body";
pub const DELETE_CONFIRM_TITLE: &str = "ao.admin.tables.delete.confirm.title";
/// `{0}` = 逗号分隔的表名
pub const DELETE_CONFIRM_BODY: &str = "ao.admin.tables.delete.confirm.body";
pub const DELETE_CONFIRM_ACTION: &str = "ao.admin.tables.delete.confirm.action";
/// `{0}` = 数量, `{1}` = 表名
pub const DELETE_DONE: &str = "ao.admin.tables.delete.done";
pub const DELETE_FAILED_TITLE: &str = "ao.admin.tables.delete.failed.title";

// ============================================================================
// 弹窗
// ============================================================================

pub const DIALOG_CLOSE: &str = "ao.admin.dialog.close";
pub const ERROR_TITLE: &str = "ao.admin.error.title";

// ============================================================================
// 状态栏
// ============================================================================

/// `{0}` = 表数量
pub const STATUS_RELOADED: &str = "ao.admin.status.reloaded";
pub const STATUS_RELOAD_FAILED: &str = "ao.admin.status.reload.failed";
/// `{0}` = 语言名称
pub const STATUS_LANGUAGE: &str = "ao.admin.status.language";
/// `{0}` = 已勾选数量
pub const STATUS_CHECKED: &str = "ao.admin.status.checked";

// ============================================================================
// 键盘提示
// ============================================================================

pub const HINT_MOVE: &str = "ao.admin.hint.move";
pub const HINT_EXPAND: &str = "ao.admin.hint.expand";
pub const HINT_CHECK: &str = "ao.admin.hint.check";
pub const HINT_DELETE: &str = "ao.admin.hint.delete";
pub const HINT_HELP: &str = "ao.admin.hint.help";
pub const HINT_QUIT: &str = "ao.admin.hint.quit";
pub const HINT_SWITCH: &str = "ao.admin.hint.switch";
pub const HINT_SELECT: &str = "ao.admin.hint.select";

// ============================================================================
// 帮助
// ============================================================================

pub const HELP_TITLE: &str = "ao.admin.help.title";
pub const HELP_NAVIGATE: &str = "ao.admin.help.navigate";
pub const HELP_EXPAND: &str = "ao.admin.help.expand";
pub const HELP_CHECK: &str = "ao.admin.help.check";
pub const HELP_DELETE: &str = "ao.admin.help.delete";
pub const HELP_RELOAD: &str = "ao.admin.help.reload";
pub const HELP_LANGUAGE: &str = "ao.admin.help.language";
pub const HELP_QUIT: &str = "ao.admin.help.quit";

/// 所有 key，启动时用于校验 bundle 是否完整
pub const ALL: &[&str] = &[
    APP_TITLE,
    PLUGIN_UNKNOWN,
    ROWS_UNKNOWN,
    TABLES_TITLE,
    TABLES_EMPTY,
    TABLES_ROW_COUNT,
    TABLES_PLUGIN_SUMMARY,
    DELETE_NONE_TITLE,
    DELETE_NONE_BODY,
    DELETE_CONFIRM_TITLE,
    DELETE_CONFIRM_BODY,
    DELETE_CONFIRM_ACTION,
    DELETE_DONE,
    DELETE_FAILED_TITLE,
    DIALOG_CLOSE,
    ERROR_TITLE,
    STATUS_RELOADED,
    STATUS_RELOAD_FAILED,
    STATUS_LANGUAGE,
    STATUS_CHECKED,
    HINT_MOVE,
    HINT_EXPAND,
    HINT_CHECK,
    HINT_DELETE,
    HINT_HELP,
    HINT_QUIT,
    HINT_SWITCH,
    HINT_SELECT,
    HELP_TITLE,
    HELP_NAVIGATE,
    HELP_EXPAND,
    HELP_CHECK,
    HELP_DELETE,
    HELP_RELOAD,
    HELP_LANGUAGE,
    HELP_QUIT,
];
