//! 内容面板消息
//!
//! 处理数据表列表中的操作

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 选择 ==========
    /// 激活当前行（插件行展开/收起，数据表行勾选）
    ActivateRow,
    /// 勾选/取消勾选当前项
    ToggleCheck,

    // ========== 表单 ==========
    /// 删除已勾选的数据表（先确认）
    Delete,
}
