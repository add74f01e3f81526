//! 国际化（i18n）模块
//!
//! 每种语言是一份 key → 模板 的 bundle，编译进二进制。
//! 运行时可以用 `messages.<语言代码>.json` 覆盖或补充模板。
//! 最终得到的 `MessageCatalog` 交给 core 的 `MessageResolver` 使用。

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ao_admin_core::{CoreError, MessageCatalog, MessageResolver};

mod en_us;
pub mod keys;
mod zh_cn;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::ZhCn]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::ZhCn => "简体中文",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        let all = Self::all();
        let index = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// 内置 bundle
    fn bundle(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::EnUs => en_us::MESSAGES,
            Language::ZhCn => zh_cn::MESSAGES,
        }
    }
}

/// 加载某语言的消息目录（内置 bundle + 可选覆盖文件）
pub fn load_catalog(lang: Language, messages_dir: Option<&Path>) -> Result<MessageCatalog> {
    let mut catalog = MessageCatalog::from_entries(lang.bundle().iter().copied());

    if let Some(dir) = messages_dir {
        let path = dir.join(format!("messages.{}.json", lang.code()));
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let overrides = MessageCatalog::from_json(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            log::info!(
                "Loaded {} message overrides from {}",
                overrides.len(),
                path.display()
            );
            catalog.merge(overrides);
        }
    }

    Ok(catalog)
}

/// 构建 resolver，并校验所有 key 都存在
///
/// 缺失 key 属于 bundle 与代码不一致，直接返回致命错误。
pub fn build_resolver(lang: Language, messages_dir: Option<&Path>) -> Result<MessageResolver> {
    let catalog = load_catalog(lang, messages_dir)?;
    if let Some(missing) = keys::ALL.iter().find(|key| !catalog.contains(key)) {
        return Err(CoreError::MissingMessageKey((*missing).to_string()).into());
    }
    Ok(MessageResolver::new(catalog))
}
