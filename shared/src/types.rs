//! Common types used across the workspace

use serde::{Deserialize, Serialize};

/// Supported UI languages
///
/// Deserializes through [`FromStr`](std::str::FromStr), so config files and
/// environment variables accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Slovak,
    English,
}

impl Language {
    /// Pick the text matching this language
    pub fn pick<'a>(&self, sk: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Slovak => sk,
            Language::English => en,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sk" | "slovak" => Ok(Language::Slovak),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
