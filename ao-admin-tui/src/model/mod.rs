//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 页面数据状态（数据表列表、弹窗）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub language: Language,                 // 当前语言
//!             pub resolver: MessageResolver,          // 当前语言的消息
//!             pub tables: TablesState,                // 数据表页面状态
//!             pub modal: ModalState,                  // 弹窗状态
//!             pub service: TableService,              // 表单提交目标
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、数据表状态（TablesState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     插件行是 `Row`，按 Enter 时由 SelectionToggle 切换选中（展开）。
//!     每张表是删除表单中的一个 `SelectableItem`，按 Space 勾选。
//!
//!     数据流：
//!         用户按 Enter（光标在插件行）
//!             ↓
//!         event/handler.rs 返回 Content(ActivateRow)
//!             ↓
//!         update/content.rs 调用 app.tables.activate_current()
//!             ↓
//!         view/pages/tables.rs 根据 row.marker() 高亮并展开
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ModalState 实现 core 的 DialogHost：
//!         - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!         - show() / hide()          // 由 ConfirmingFormSubmitter 调用
//!
//!     数据流：
//!         用户按 d（删除）
//!             ↓
//!         update/content.rs 构建 ConfirmingFormSubmitter 并 activate(&mut app.modal)
//!             ↓
//!         ModalState.active = Some(Modal::Dialog { ... })
//!             ↓
//!         view/components/modal.rs 检测到弹窗，渲染弹窗 UI
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{ListEntry, Modal, ModalState, TablesState};

#[cfg(test)]
pub(crate) use app::test_support;
