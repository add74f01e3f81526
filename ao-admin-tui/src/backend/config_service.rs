//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖配置语言的环境变量
pub const LANGUAGE_ENV: &str = "AO_ADMIN_LANG";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ao-admin-tui")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 语言代码，如 `en-US`
    pub language: String,
    /// 数据表目录文件；为空时使用配置目录下的 `tables.json`
    pub tables_file: Option<PathBuf>,
    /// 消息覆盖文件所在目录；为空时使用配置目录
    pub messages_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::default().code().to_string(),
            tables_file: None,
            messages_dir: None,
        }
    }
}

impl AppConfig {
    /// 解析后的语言；无法识别的代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("Unknown language {:?}, using default", self.language);
            Language::default()
        })
    }

    pub fn tables_file(&self) -> PathBuf {
        self.tables_file
            .clone()
            .unwrap_or_else(|| config_dir().join("tables.json"))
    }

    pub fn messages_dir(&self) -> PathBuf {
        self.messages_dir.clone().unwrap_or_else(config_dir)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 环境变量读取函数
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
    env: EnvLookup,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            env: process_env,
        }
    }

    /// 替换环境变量来源
    #[must_use]
    pub fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let mut config = if self.path.exists() {
            let content = fs::read_to_string(&self.path)
                .with_context(|| format!("reading {}", self.path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", self.path.display()))?
        } else {
            log::info!("No config at {}, using defaults", self.path.display());
            AppConfig::default()
        };

        if let Some(lang) = (self.env)(LANGUAGE_ENV) {
            log::info!("Language overridden by {LANGUAGE_ENV}: {lang}");
            config.language = lang;
        }

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn service(path: PathBuf) -> LocalConfigService {
        LocalConfigService::with_path(path).with_env(no_env)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path().join("config.json"));
        let config = service.load().unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.tables_file.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(dir.path().join("nested/config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            tables_file: Some(dir.path().join("tables.json")),
            messages_dir: None,
        };
        service.save(&config).unwrap();

        let loaded = service.load().unwrap();
        assert_eq!(loaded.theme, Theme::Light);
        assert_eq!(loaded.tables_file, config.tables_file);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme": "light"}"#).unwrap();
        let config = service(path).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert!(config.messages_dir.is_none());
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
    }

    #[test]
    fn test_env_overrides_language() {
        fn zh(name: &str) -> Option<String> {
            (name == LANGUAGE_ENV).then(|| "zh-CN".to_string())
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"language": "en-US"}"#).unwrap();

        let config = LocalConfigService::with_path(path).with_env(zh).load().unwrap();
        assert_eq!(config.language(), Language::ZhCn);
    }
}
