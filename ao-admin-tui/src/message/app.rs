//! 应用主消息枚举

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 重新加载数据表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换到下一种语言
    CycleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
