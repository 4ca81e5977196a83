//! Parsed `.grc` document structure
//!
//! A `.grc` file is plain text: one `#`-prefixed title line, an optional
//! `bioregion:` header line, then `##`-prefixed section headings with free
//! text between them.

use serde::{Deserialize, Serialize};

/// One named section of a `.grc` document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrcSection {
    pub heading: String,
    pub content: String,
}

/// A parsed `.grc` ritual document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrcDocument {
    /// From the `#` title line
    pub title: String,
    /// From the `bioregion:` header line; empty when absent
    pub bioregion: String,
    pub sections: Vec<GrcSection>,
    /// All non-header text, headings stripped; what the core analyzes
    pub body: String,
}
