//! Validation orchestrator: runs the three analyzers and joins their output
//!
//! Approval is an AND of three per-axis gates, not a weighted blend: no
//! single high score can compensate for another axis failing its own gate.

use std::sync::Arc;

use crate::core::{CedaAnalyzer, EsepAnalyzer, Lexicon, NarrativeAnalyzer};
use crate::types::{CedaReport, EsepReport, NarrativeReport, ValidationResult};
use crate::{CEDA_MIN_REFERENCES, ESEP_APPROVAL_MAX, NARRATIVE_APPROVAL_MIN};

/// The three-axis approval gate. All thresholds are inclusive on the passing
/// side.
pub fn passes_gates(esep_score: f64, reference_count: usize, narrative_score: f64) -> bool {
    esep_score <= ESEP_APPROVAL_MAX
        && reference_count >= CEDA_MIN_REFERENCES
        && narrative_score >= NARRATIVE_APPROVAL_MIN
}

/// Validation orchestrator over the three analyzers
#[derive(Debug, Clone)]
pub struct Validator {
    esep: EsepAnalyzer,
    ceda: CedaAnalyzer,
    narrative: NarrativeAnalyzer,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a validator over the built-in lexicon
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    /// Create a validator over a caller-supplied lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            esep: EsepAnalyzer::new(lexicon.clone()),
            ceda: CedaAnalyzer::new(lexicon.clone()),
            narrative: NarrativeAnalyzer::new(lexicon),
        }
    }

    /// Run all three analyzers sequentially and join their output.
    ///
    /// `bioregion_id` is carried through for collaborator compatibility and
    /// never influences scoring.
    pub fn validate(&self, text: &str, bioregion_id: &str) -> ValidationResult {
        let esep = self.esep.evaluate(text);
        let ceda = self.ceda.evaluate(text);
        let narrative = self.narrative.evaluate(text);
        combine(bioregion_id, esep, ceda, narrative)
    }

    /// Run the three analyzers as independent blocking tasks and join them.
    ///
    /// The analyzers share no mutable state, so this returns results
    /// identical to [`Validator::validate`]. Falls back to the sequential
    /// path if any task fails to join.
    pub async fn validate_concurrent(&self, text: &str, bioregion_id: &str) -> ValidationResult {
        let shared: Arc<str> = Arc::from(text);

        let esep_task = {
            let analyzer = self.esep.clone();
            let text = shared.clone();
            tokio::task::spawn_blocking(move || analyzer.evaluate(&text))
        };
        let ceda_task = {
            let analyzer = self.ceda.clone();
            let text = shared.clone();
            tokio::task::spawn_blocking(move || analyzer.evaluate(&text))
        };
        let narrative_task = {
            let analyzer = self.narrative.clone();
            let text = shared.clone();
            tokio::task::spawn_blocking(move || analyzer.evaluate(&text))
        };

        match tokio::join!(esep_task, ceda_task, narrative_task) {
            (Ok(esep), Ok(ceda), Ok(narrative)) => combine(bioregion_id, esep, ceda, narrative),
            _ => self.validate(text, bioregion_id),
        }
    }
}

/// Join analyzer reports into the final result: apply the AND-gate, merge
/// feedback in analyzer order (no dedup), flatten CEDA matched text
fn combine(
    bioregion_id: &str,
    esep: EsepReport,
    ceda: CedaReport,
    narrative: NarrativeReport,
) -> ValidationResult {
    let is_approved = passes_gates(esep.score, ceda.reference_count, narrative.overall_score);

    let mut feedback = Vec::new();
    feedback.extend(esep.feedback.iter().cloned());
    feedback.extend(ceda.feedback.iter().cloned());
    feedback.extend(narrative.feedback.iter().cloned());

    let cultural_references = ceda
        .references
        .iter()
        .map(|reference| reference.matched_text.clone())
        .collect();

    let issues = narrative.issues.clone();

    ValidationResult {
        bioregion_id: bioregion_id.to_string(),
        esep_score: esep.score,
        ceda_reference_count: ceda.reference_count,
        narrative_score: narrative.overall_score,
        is_approved,
        feedback,
        cultural_references,
        issues,
        esep,
        ceda,
        narrative,
    }
}

// =============================================================================
// TESTS
// =============================================================================
