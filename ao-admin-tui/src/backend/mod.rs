//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责配置与数据表目录。
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置（JSON 文件）
//!         mod table_repository;   // 数据表目录（JSON 文件 / 内存）
//!         mod table_service;      // 数据表服务，接收确认后的表单提交
//!
//!     数据流：
//!         用户在确认弹窗中按下“删除”
//!             ↓
//!         update/modal.rs 调用 ConfirmingFormSubmitter::confirm
//!             ↓
//!         TableService::submit → TableRepository::delete
//!             ↓
//!         update 层从 TableService::list 重新加载列表

mod config_service;
mod table_repository;
mod table_service;

pub use config_service::{config_dir, AppConfig, ConfigService, LocalConfigService};
pub use table_repository::{
    sample_tables, InMemoryTableRepository, JsonTableRepository, TableRepository,
};
pub use table_service::{TableService, DELETE_ACTION, TABLES_FORM_ID};
