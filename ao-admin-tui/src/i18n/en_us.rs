//! 英文翻译 (en-US)

use super::keys::{
    APP_TITLE, DELETE_CONFIRM_ACTION, DELETE_CONFIRM_BODY, DELETE_CONFIRM_TITLE, DELETE_DONE,
    DELETE_FAILED_TITLE, DELETE_NONE_BODY, DELETE_NONE_TITLE, DIALOG_CLOSE, ERROR_TITLE, HELP_CHECK,
    HELP_DELETE, HELP_EXPAND, HELP_LANGUAGE, HELP_NAVIGATE, HELP_QUIT, HELP_RELOAD, HELP_TITLE,
    HINT_CHECK, HINT_DELETE, HINT_EXPAND, HINT_HELP, HINT_MOVE, HINT_QUIT, HINT_SELECT,
    HINT_SWITCH, PLUGIN_UNKNOWN, ROWS_UNKNOWN, STATUS_CHECKED, STATUS_LANGUAGE, STATUS_RELOADED,
    STATUS_RELOAD_FAILED, TABLES_EMPTY, TABLES_PLUGIN_SUMMARY, TABLES_ROW_COUNT, TABLES_TITLE,
};

pub const MESSAGES: &[(&str, &str)] = &[
    // ========================================================================
    // 通用文本
    // ========================================================================
    (APP_TITLE, "Active Objects"),
    (PLUGIN_UNKNOWN, "Unknown plugin"),
    (ROWS_UNKNOWN, "unknown"),
    // ========================================================================
    // 表格页面
    // ========================================================================
    (TABLES_TITLE, "Tables"),
    (TABLES_EMPTY, "No Active Objects tables were found."),
    (TABLES_ROW_COUNT, "{0} rows"),
    (TABLES_PLUGIN_SUMMARY, "{0} tables, {1} rows"),
    // ========================================================================
    // 删除流程
    // ========================================================================
    (DELETE_NONE_TITLE, "Nothing selected"),
    (DELETE_NONE_BODY, "Select at least one table to delete."),
    (DELETE_CONFIRM_TITLE, "Delete tables"),
    (
        DELETE_CONFIRM_BODY,
        "The following tables and all of their data will be deleted: {0}. This cannot be undone.",
    ),
    (DELETE_CONFIRM_ACTION, "Delete"),
    (DELETE_DONE, "Deleted {0} table(s): {1}"),
    (DELETE_FAILED_TITLE, "Delete failed"),
    // ========================================================================
    // 弹窗
    // ========================================================================
    (DIALOG_CLOSE, "Close"),
    (ERROR_TITLE, "Error"),
    // ========================================================================
    // 状态栏
    // ========================================================================
    (STATUS_RELOADED, "Loaded {0} tables"),
    (STATUS_RELOAD_FAILED, "Could not reload tables"),
    (STATUS_LANGUAGE, "Language: {0}"),
    (STATUS_CHECKED, "{0} selected"),
    // ========================================================================
    // 键盘提示
    // ========================================================================
    (HINT_MOVE, "Move"),
    (HINT_EXPAND, "Expand"),
    (HINT_CHECK, "Check"),
    (HINT_DELETE, "Delete"),
    (HINT_HELP, "Help"),
    (HINT_QUIT, "Quit"),
    (HINT_SWITCH, "Switch"),
    (HINT_SELECT, "Select"),
    // ========================================================================
    // 帮助
    // ========================================================================
    (HELP_TITLE, "Help"),
    (HELP_NAVIGATE, "Move between plugins and tables"),
    (HELP_EXPAND, "Expand or collapse a plugin"),
    (HELP_CHECK, "Check or uncheck a table"),
    (HELP_DELETE, "Delete the checked tables"),
    (HELP_RELOAD, "Reload the table list"),
    (HELP_LANGUAGE, "Switch language"),
    (HELP_QUIT, "Quit"),
];
