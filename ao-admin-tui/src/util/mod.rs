//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：终端的初始化和恢复，日志的初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志文件（tracing-subscriber + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     启动顺序（src/main.rs）：
//!
//!         let _guard = init_logging()?;               // 1. 日志最先初始化，guard 持有到 main 结束
//!         let config = LocalConfigService::new()?.load()?;
//!         let mut app = App::new(...)?;               // 2. 消息 key 缺失时在此失败，终端尚未接管
//!         let mut terminal = init_terminal()?;        // 3. 原始模式 + 备用屏幕
//!         let result = app::run(&mut terminal, &mut app);
//!         restore_terminal(&mut terminal)?;           // 4. 无论 run 成功与否都先恢复终端
//!         result                                      // 5. 再返回结果
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!         - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     · 日志
//!         - 终端被 TUI 占用，日志只写文件：
//!             dirs::data_local_dir()/ao-admin-tui/ao-admin-tui.log
//!         - 过滤器取自 RUST_LOG，默认 info
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
