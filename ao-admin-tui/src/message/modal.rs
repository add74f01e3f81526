//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（等同于关闭/取消按钮）
    Close,

    /// 焦点移到下一个按钮
    NextAction,

    /// 焦点移到上一个按钮
    PrevAction,

    /// 执行焦点所在按钮
    Submit,

    /// 直接确认（y）
    Confirm,
}
