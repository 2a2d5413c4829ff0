//! Student Roster TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 记录与选中状态由 `student-roster-core` 的 `SelectionController` 管理，
//! TUI 只负责输入、展示与配置。
//!
//!
//! main.rs 的执行顺序：
//!
//!     LocalConfigService::load()  // 读取配置，失败时使用默认值
//!     init_logging()              // 日志写入文件，guard 需存活到退出
//!     set_theme / set_language    // 应用配置中的主题与语言
//!     init_terminal()             // 原始模式 + 备用屏幕
//!     app::run()                  // 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置（损坏的配置不阻止启动，错误在日志就绪后记录）
    let config_service = LocalConfigService::new();
    let loaded = config_service.load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(e) => {
            eprintln!("Warning: {e:#}, using default settings");
            backend::AppConfig::default()
        }
    };

    // 2. 初始化日志（guard 必须存活到 main 结束）
    let _log_guard = match init_logging(&config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };
    log::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    match loaded {
        Ok(_) if !config_service.exists() => log::info!(
            "No config at {}, using defaults",
            config_service.path().display()
        ),
        Ok(_) => log::info!("Loaded config from {}", config_service.path().display()),
        Err(e) => log::warn!("Ignoring unreadable config: {e:#}"),
    }

    // 3. 应用主题与语言
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(config, Box::new(config_service));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
