//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   ┌─────────┐          ┌───────────┐          ┌──────────┐                 │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │                 │
//！│   │   层    │   翻译    │    层     │   消费    │    层    │                 │
//！│   └─────────┘          │ AppMessage│          └────┬─────┘                 │
//！│        ▲               │ ContentMsg│               │ 修改                  │
//！│        │               │ ModalMsg  │               ▼                       │
//！│   ┌─────────┐          └───────────┘          ┌──────────┐   提交    ┌─────────┐
//！│   │  View   │ ◀────────── 读取 ────────────── │  Model   │ ───────▶ │ Backend │
//！│   │   层    │                                 │    层    │          │   层    │
//！│   └─────────┘                                 └──────────┘          └─────────┘
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，下一轮自动重绘
//!             其他事件                             // 忽略
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - 全局快捷键，就地处理
//!                 - 其余按键交给 handle_table_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Esc / n         → ModalMessage::Close       关闭（不提交）
//!         Tab / → / ←     → ModalMessage::NextAction / PrevAction
//!         Enter           → ModalMessage::Submit      执行焦点所在按钮
//!         y               → ModalMessage::Confirm     直接确认
//!
//!
//!     handler.rs 使用 message 层定义的 AppMessage 枚举类型，
//!     创建一个对应的枚举值并返回。
//!     在 src/app.rs 中，有：
//!         update::update(app, msg)?;
//!                             ↑↑↑                     // 在此作为参数传入 update 层
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
