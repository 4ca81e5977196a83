//! Per-analyzer report structures

use serde::{Deserialize, Serialize};

use crate::types::{CulturalReference, NarrativeIssue};

/// ESEP report: ethical/spiritual balance and negative-content density.
///
/// `score` is inverted relative to the other analyzers: LOWER is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsepReport {
    /// Composite score, 0.0-1.0, lower is better
    pub score: f64,
    /// Ethical vocabulary density (0.0-1.0)
    pub ethical_score: f64,
    /// Spiritual vocabulary density (0.0-1.0)
    pub spiritual_score: f64,
    /// Negative vocabulary density (0.0-1.0), twice as sensitive
    pub negative_score: f64,
    /// 1.0 = perfectly balanced presence of both dimensions
    pub balance_score: f64,
    /// Whitespace-delimited word count of the input
    pub word_count: usize,
    pub feedback: Vec<String>,
}

/// CEDA report: cultural references with diversity and authenticity indices.
///
/// The gated score is `reference_count`; higher is better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CedaReport {
    /// Number of distinct cultural references found
    pub reference_count: usize,
    pub references: Vec<CulturalReference>,
    /// Normalized Shannon entropy over reference categories (0.0-1.0)
    pub diversity: f64,
    /// Confidence-weighted mean with context bonus and density penalty
    pub authenticity: f64,
    pub word_count: usize,
    pub feedback: Vec<String>,
}

/// Narrative forensics report. All sub-scores report HIGHER as better.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeReport {
    /// 1.0 = no polarizing language
    pub polarization_score: f64,
    /// 1.0 = no biased language
    pub bias_score: f64,
    /// Density of community-harmony language (not inverted)
    pub harmony_score: f64,
    /// Share of evidentiary claims that are hedged; 1.0 when no claims
    pub fact_score: f64,
    /// Weighted composite, 0.0-1.0, higher is better
    pub overall_score: f64,
    pub feedback: Vec<String>,
    pub issues: Vec<NarrativeIssue>,
    pub recommendations: Vec<String>,
}
