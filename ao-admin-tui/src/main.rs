//! Active Objects 数据表管理 TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与数据表服务 (`backend/`)
//!
//! 选中切换、消息解析和删除确认流程位于 `ao-admin-core`。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，guard 持有到 main 结束
//!     LocalConfigService      // 读取 config.json（AO_ADMIN_LANG 可覆盖语言）
//!     TableService            // 打开 tables.json，不存在时使用示例数据
//!     model::App::new()       // 加载并校验消息；缺少 key 时在接管终端之前失败
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{AppConfig, ConfigService, JsonTableRepository, LocalConfigService, TableService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    let _log_guard = init_logging()?;
    log::info!("Starting ao-admin-tui v{}", env!("CARGO_PKG_VERSION"));

    // 2. 加载配置，首次运行时写入默认配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&AppConfig::default()) {
            log::warn!("Could not write default config: {e:#}");
        }
    }
    view::theme::set_theme_index(config.theme.index());

    // 3. 打开数据表目录
    let tables_file = config.tables_file();
    let repository = JsonTableRepository::open(&tables_file)
        .with_context(|| format!("Failed to open table catalog {}", tables_file.display()))?;
    let service = TableService::new(Box::new(repository));

    // 4. 创建应用实例
    let mut app = model::App::new(config.language(), Some(config.messages_dir()), service)?;

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exiting with error: {e:#}");
    }
    result
}
