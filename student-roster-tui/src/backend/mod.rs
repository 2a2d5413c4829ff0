//!
//! src/backend/mod.rs
//! Backend 层：与终端无关的外部服务
//!
//! 目前只有配置服务：读取 / 写入 `<config_dir>/student-roster/config.json`。
//! 学生列表本身只存在于内存中，不做持久化。
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
