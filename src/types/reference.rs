//! Cultural reference types produced by the CEDA analyzer

use serde::{Deserialize, Serialize};

/// Category of a detected cultural reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceCategory {
    /// Named traditions, lineages, seasonal observances
    Tradition,
    /// Terms carried over from a cultural language
    Language,
    /// Physical or visual symbols (plants, objects, shapes)
    Symbol,
    /// Enacted practices (blessing, chanting, offering)
    Practice,
    /// Belief statements detected by sentence templates
    Belief,
    /// Customs detected by sentence templates
    Custom,
}

impl ReferenceCategory {
    /// Human label for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceCategory::Tradition => "tradition",
            ReferenceCategory::Language => "language",
            ReferenceCategory::Symbol => "symbol",
            ReferenceCategory::Practice => "practice",
            ReferenceCategory::Belief => "belief",
            ReferenceCategory::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ReferenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single detected cultural reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalReference {
    /// Which lexicon category (or template kind) matched
    pub category: ReferenceCategory,
    /// The matched term, phrase, or template capture
    pub matched_text: String,
    /// Detection confidence (0.0-1.0)
    pub confidence: f64,
    /// Snippet of text around the match
    pub context: String,
}
