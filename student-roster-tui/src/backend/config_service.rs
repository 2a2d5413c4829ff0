//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 配置目录下的应用子目录名
const APP_DIR: &str = "student-roster";
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 语言代码（BCP 47），未知代码回退到 en-US
    pub language: String,
    /// 日志过滤指令（`EnvFilter` 语法），环境变量 `STUDENT_ROSTER_LOG` 优先
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 解析后的语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台默认配置路径
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
        Self::with_path(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// 使用指定的配置文件路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 配置文件是否已存在（首次启动时为 false）
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.exists() {
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write config {}", self.path.display()))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(tmp.path().join("none.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_exists_after_first_save() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(tmp.path().join("config.json"));
        assert!(!service.exists());

        service.save(&AppConfig::default()).unwrap();
        assert!(service.exists());
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(tmp.path().join("nested/config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "vi-VN".to_string(),
            log_level: "debug".to_string(),
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light" }"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language(), Language::EnUs);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(LocalConfigService::with_path(&path).load().is_err());
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }
}
