//! Aggregate validation result returned by the orchestrator

use serde::{Deserialize, Serialize};

use crate::types::{CedaReport, EsepReport, NarrativeIssue, NarrativeReport};
use crate::{CEDA_MIN_REFERENCES, ESEP_APPROVAL_MAX, NARRATIVE_APPROVAL_MIN};

/// The approval decision, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// All three gates passed
    Approved,
    /// At least one gate failed
    Rejected,
}

impl Verdict {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Verdict::Approved => "\x1b[32m", // Green
            Verdict::Rejected => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::Approved => "APPROVED",
            Verdict::Rejected => "REJECTED",
        };
        write!(f, "{}", name)
    }
}

/// Joined output of the three analyzers plus the approval decision.
///
/// Created once per validation call and never mutated afterward. Contains no
/// timestamp: time belongs to the caller side of the boundary (see
/// `ValidationRecord`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Carried through for collaborator compatibility; never affects scoring
    pub bioregion_id: String,
    /// ESEP composite (0.0-1.0, lower is better)
    pub esep_score: f64,
    /// Distinct cultural references found (higher is better)
    pub ceda_reference_count: usize,
    /// Narrative composite (0.0-1.0, higher is better)
    pub narrative_score: f64,
    /// AND of the three per-axis gates
    pub is_approved: bool,
    /// Merged feedback in analyzer order (ESEP, CEDA, narrative), no dedup
    pub feedback: Vec<String>,
    /// Flattened matched-text values from CEDA
    pub cultural_references: Vec<String>,
    /// Narrative issues, in detection order
    pub issues: Vec<NarrativeIssue>,
    pub esep: EsepReport,
    pub ceda: CedaReport,
    pub narrative: NarrativeReport,
}

impl ValidationResult {
    /// The decision as a display enum
    pub fn verdict(&self) -> Verdict {
        if self.is_approved {
            Verdict::Approved
        } else {
            Verdict::Rejected
        }
    }

    /// Which gates failed, as short labels (empty when approved)
    pub fn failed_gates(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.esep_score > ESEP_APPROVAL_MAX {
            failed.push("esep");
        }
        if self.ceda_reference_count < CEDA_MIN_REFERENCES {
            failed.push("ceda");
        }
        if self.narrative_score < NARRATIVE_APPROVAL_MIN {
            failed.push("narrative");
        }
        failed
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let verdict = self.verdict();
        format!(
            "{}{} | esep={:.3} | refs={} | narrative={:.3}{}",
            verdict.color_code(),
            verdict,
            self.esep_score,
            self.ceda_reference_count,
            self.narrative_score,
            Verdict::color_reset()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "verdict={} | esep={:.3} | refs={} | narrative={:.3}",
            self.verdict(),
            self.esep_score,
            self.ceda_reference_count,
            self.narrative_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CedaReport, EsepReport, NarrativeReport};

    fn stub_result(esep: f64, refs: usize, narrative: f64, approved: bool) -> ValidationResult {
        ValidationResult {
            bioregion_id: "cascadia".to_string(),
            esep_score: esep,
            ceda_reference_count: refs,
            narrative_score: narrative,
            is_approved: approved,
            feedback: vec![],
            cultural_references: vec![],
            issues: vec![],
            esep: EsepReport {
                score: esep,
                ethical_score: 0.0,
                spiritual_score: 0.0,
                negative_score: 0.0,
                balance_score: 1.0,
                word_count: 0,
                feedback: vec![],
            },
            ceda: CedaReport {
                reference_count: refs,
                references: vec![],
                diversity: 0.0,
                authenticity: 0.0,
                word_count: 0,
                feedback: vec![],
            },
            narrative: NarrativeReport {
                polarization_score: 1.0,
                bias_score: 1.0,
                harmony_score: 0.0,
                fact_score: 1.0,
                overall_score: narrative,
                feedback: vec![],
                issues: vec![],
                recommendations: vec![],
            },
        }
    }

    #[test]
    fn test_failed_gates_labels() {
        let result = stub_result(0.9, 1, 0.5, false);
        assert_eq!(result.failed_gates(), vec!["esep", "ceda", "narrative"]);

        let result = stub_result(0.2, 4, 0.8, true);
        assert!(result.failed_gates().is_empty());
    }

    #[test]
    fn test_parseable_format() {
        let result = stub_result(0.2, 4, 0.8, true);
        let formatted = result.to_parseable_string();
        assert!(formatted.contains("verdict=APPROVED"));
        assert!(formatted.contains("esep=0.200"));
        assert!(formatted.contains("refs=4"));
    }

    #[test]
    fn test_json_roundtrip() {
        let result = stub_result(0.2, 4, 0.8, true);
        let json = serde_json::to_string(&result).unwrap();
        let back: ValidationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ceda_reference_count, 4);
        assert_eq!(back.verdict(), Verdict::Approved);
    }
}
