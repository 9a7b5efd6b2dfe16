use std::fmt;

use serde::{Deserialize, Serialize};

/// The two languages the portfolio is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Tr,
    En,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 2] = [LanguageCode::Tr, LanguageCode::En];

    /// Code for the document `lang` attribute. Matches the serde form,
    /// which is what gets persisted.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
        }
    }

    /// Upper-case code shown on the language toggle.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Tr => "TR",
            Self::En => "EN",
        }
    }

    pub fn other(&self) -> LanguageCode {
        match self {
            Self::Tr => Self::En,
            Self::En => Self::Tr,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A pair of hand-authored strings, one per language.
///
/// Both variants are expected to be non-empty. Nothing enforces that at
/// runtime: `get` reports an empty variant as missing and callers keep
/// whatever they were showing before.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    pub tr: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(tr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            tr: tr.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: LanguageCode) -> Option<&str> {
        let text = match language {
            LanguageCode::Tr => self.tr.as_str(),
            LanguageCode::En => self.en.as_str(),
        };
        if text.is_empty() { None } else { Some(text) }
    }

    pub fn is_complete(&self) -> bool {
        LanguageCode::ALL.iter().all(|lang| self.get(*lang).is_some())
    }
}
