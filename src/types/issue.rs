//! Narrative issue types: categorized findings with severity

use serde::{Deserialize, Serialize};

/// Severity of a narrative issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    /// Reserved for findings that block submission at the ingress boundary
    Critical,
}

impl Severity {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Severity::Low => "\x1b[90m",      // Gray
            Severity::Medium => "\x1b[33m",   // Yellow
            Severity::High => "\x1b[31m",     // Red
            Severity::Critical => "\x1b[35m", // Magenta
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        write!(f, "{}", name)
    }
}

/// Category of a narrative issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    /// Divisive us-versus-them framing
    Polarization,
    /// Loaded or hierarchical language
    Bias,
    /// Unhedged evidentiary claims
    Factual,
    /// Missing community-harmony language
    Harmony,
    /// Protected knowledge referenced without permission context
    Cultural,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IssueCategory::Polarization => "polarization",
            IssueCategory::Bias => "bias",
            IssueCategory::Factual => "factual",
            IssueCategory::Harmony => "harmony",
            IssueCategory::Cultural => "cultural",
        };
        write!(f, "{}", name)
    }
}

/// A single narrative finding with its location and remedy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeIssue {
    pub category: IssueCategory,
    pub severity: Severity,
    /// What was found
    pub description: String,
    /// The offending text (truncated to a readable length)
    pub excerpt: String,
    /// How to address it
    pub suggestion: String,
}

impl NarrativeIssue {
    /// Create a new issue
    pub fn new(
        category: IssueCategory,
        severity: Severity,
        description: impl Into<String>,
        excerpt: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            description: description.into(),
            excerpt: excerpt.into(),
            suggestion: suggestion.into(),
        }
    }
}
