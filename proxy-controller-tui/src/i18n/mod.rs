//! 国际化 (i18n)
//!
//! 翻译表为编译期常量，按 [`Language`] 选择后经 `ViewContext` 传给渲染层。
//!
//! ## 使用方式
//!
//! ```rust
//! use proxy_controller_tui::i18n::{Language, translations};
//!
//! let texts = translations(Language::ZhCn);
//! assert_eq!(texts.banner.loading, "正在加载代理...");
//! ```

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 简体中文（中国）
    ZhCn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 从语言代码解析（大小写与分隔符不敏感）
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Some(Language::EnUs),
            "zh-cn" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }
}

/// 获取指定语言的翻译表
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::EnUs => &en_us::TRANSLATIONS,
        Language::ZhCn => &zh_cn::TRANSLATIONS,
    }
}
