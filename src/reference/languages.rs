//! Language picker entries
//!
//! Selecting a language only changes the displayed label; no text is
//! translated.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    /// ISO 639-1 code
    pub code: &'static str,
    pub name: &'static str,
    /// Name in its own script
    pub native: &'static str,
}

const LANGUAGES: [Language; 6] = [
    Language { code: "en", name: "English", native: "English" },
    Language { code: "hi", name: "Hindi", native: "हिंदी" },
    Language { code: "or", name: "Odia", native: "ଓଡ଼ିଆ" },
    Language { code: "mr", name: "Marathi", native: "मराठी" },
    Language { code: "ta", name: "Tamil", native: "தமிழ்" },
    Language { code: "te", name: "Telugu", native: "తెలుగు" },
];

pub const DEFAULT_LANGUAGE: &str = "en";

pub fn languages() -> &'static [Language] {
    &LANGUAGES
}

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code.eq_ignore_ascii_case(code.trim()))
}
