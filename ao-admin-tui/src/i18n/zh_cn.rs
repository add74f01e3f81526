//! 简体中文翻译 (zh-CN)

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
    (PLUGIN_UNKNOWN, "未知插件"),
    (ROWS_UNKNOWN, "未知"),
    // ========================================================================
    // 表格页面
    // ========================================================================
    (TABLES_TITLE, "数据表"),
    (TABLES_EMPTY, "未找到 Active Objects 数据表。"),
    (TABLES_ROW_COUNT, "{0} 行"),
    (TABLES_PLUGIN_SUMMARY, "{0} 张表，共 {1} 行"),
    // ========================================================================
    // 删除流程
    // ========================================================================
    (DELETE_NONE_TITLE, "未选择任何表"),
    (DELETE_NONE_BODY, "请至少勾选一张要删除的表。"),
    (DELETE_CONFIRM_TITLE, "删除数据表"),
    (
        DELETE_CONFIRM_BODY,
        "以下数据表及其全部数据将被删除：{0}。此操作无法撤销。",
    ),
    (DELETE_CONFIRM_ACTION, "删除"),
    (DELETE_DONE, "已删除 {0} 张表：{1}"),
    (DELETE_FAILED_TITLE, "删除失败"),
    // ========================================================================
    // 弹窗
    // ========================================================================
    (DIALOG_CLOSE, "关闭"),
    (ERROR_TITLE, "错误"),
    // ========================================================================
    // 状态栏
    // ========================================================================
    (STATUS_RELOADED, "已加载 {0} 张表"),
    (STATUS_RELOAD_FAILED, "无法重新加载数据表"),
    (STATUS_LANGUAGE, "语言：{0}"),
    (STATUS_CHECKED, "已勾选 {0} 项"),
    // ========================================================================
    // 键盘提示
    // ========================================================================
    (HINT_MOVE, "移动"),
    (HINT_EXPAND, "展开"),
    (HINT_CHECK, "勾选"),
    (HINT_DELETE, "删除"),
    (HINT_HELP, "帮助"),
    (HINT_QUIT, "退出"),
    (HINT_SWITCH, "切换"),
    (HINT_SELECT, "确定"),
    // ========================================================================
    // 帮助
    // ========================================================================
    (HELP_TITLE, "帮助"),
    (HELP_NAVIGATE, "在插件和数据表之间移动"),
    (HELP_EXPAND, "展开或收起插件"),
    (HELP_CHECK, "勾选或取消勾选数据表"),
    (HELP_DELETE, "删除已勾选的数据表"),
    (HELP_RELOAD, "重新加载数据表列表"),
    (HELP_LANGUAGE, "切换语言"),
    (HELP_QUIT, "退出"),
];
