//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 原应用面向越南语用户，因此提供 en-US 与 vi-VN 两套文本。

use std::sync::atomic::{AtomicUsize, Ordering};

use student_roster_core::{RosterError, ValidationIssue};

mod en_us;
pub mod keys;
mod vi_vn;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 越南语（越南）
    ViVn,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ViVn => "vi-VN",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "vi-VN" | "vi" => Some(Language::ViVn),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::ViVn,
            Language::ViVn => Language::EnUs,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &vi_vn::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::ViVn => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

/// 翻译 core 层通过 `show_message` 推送的提示
///
/// core 只产生英文文本，这里以其为键查表；未知文本原样返回。
pub fn localize_core_message(text: &str) -> String {
    let messages = &t().messages;
    let known = [
        (
            RosterError::ValidationError(ValidationIssue::BothFieldsRequired),
            messages.both_fields_required,
        ),
        (
            RosterError::ValidationError(ValidationIssue::NameRequired),
            messages.name_required,
        ),
        (RosterError::NoSelection, messages.select_to_update),
    ];

    known
        .iter()
        .find(|(err, _)| err.user_message() == Some(text))
        .map_or_else(|| text.to_string(), |(_, localized)| (*localized).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("vi"), Some(Language::ViVn));
        assert_eq!(Language::from_code("en-US"), Some(Language::EnUs));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::EnUs.next().next(), Language::EnUs);
    }

    #[test]
    fn test_localize_unknown_passthrough() {
        assert_eq!(localize_core_message("something else"), "something else");
    }

    #[test]
    fn test_localize_known_message() {
        let text = RosterError::NoSelection.user_message().unwrap();
        let localized = localize_core_message(text);
        assert!(
            localized == en_us::TRANSLATIONS.messages.select_to_update
                || localized == vi_vn::TRANSLATIONS.messages.select_to_update
        );
    }
}
