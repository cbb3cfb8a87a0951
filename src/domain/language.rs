//! Target writing languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language the review should be written in.
///
/// Defaults to [`Language::Zh`] when a request omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Zh,
    Ja,
    De,
    Fr,
    Ko,
    Es,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Zh,
        Language::Ja,
        Language::De,
        Language::Fr,
        Language::Ko,
        Language::Es,
    ];

    /// Wire identifier of the language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Ko => "ko",
            Language::Es => "es",
        }
    }

    /// True only for the language that has its own authored template.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Language::En)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
