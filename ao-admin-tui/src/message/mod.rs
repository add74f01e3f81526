//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 数据表列表中的子消息
//!         mod modal;          // 弹窗相关的子消息
//!
//!
//!     在 src/event/handler.rs 中，有：
//!         pub fn handle_event(event: Event, app: &App) -> AppMessage {
//!             match event {
//!                 Event::Key(key) if ... => AppMessage::...,
//!                 _ => AppMessage::Noop
//!             }
//!         }
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
