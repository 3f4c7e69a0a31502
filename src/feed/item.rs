use std::fmt;

use serde::Serialize;

/// Category of a suggestion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Video,
    Music,
    Image,
    Article,
    Wikipedia,
    History,
}

impl SuggestionKind {
    pub const ALL: [SuggestionKind; 6] = [
        SuggestionKind::Video,
        SuggestionKind::Music,
        SuggestionKind::Image,
        SuggestionKind::Article,
        SuggestionKind::Wikipedia,
        SuggestionKind::History,
    ];

    /// Lowercase label shown on cards and matched by search
    pub fn label(self) -> &'static str {
        match self {
            SuggestionKind::Video => "video",
            SuggestionKind::Music => "music",
            SuggestionKind::Image => "image",
            SuggestionKind::Article => "article",
            SuggestionKind::Wikipedia => "wikipedia",
            SuggestionKind::History => "history",
        }
    }

    /// One-letter thumbnail: uppercased first character of the label
    pub fn glyph(self) -> char {
        self.label()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single feed entry. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionItem {
    #[serde(rename = "type")]
    kind: SuggestionKind,
    title: String,
    #[serde(rename = "desc")]
    description: String,
}

impl SuggestionItem {
    pub fn new(kind: SuggestionKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn kind(&self) -> SuggestionKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lowercased `title description type`, the haystack used by search
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.kind).to_lowercase()
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
