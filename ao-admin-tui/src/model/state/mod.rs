//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod modal;
mod tables;

pub use modal::{Modal, ModalState};
pub use tables::{ListEntry, TablesState};
