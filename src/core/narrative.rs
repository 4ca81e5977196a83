//! Narrative forensics analyzer: polarization, bias, harmony, fact hedging
//!
//! All four sub-scores report HIGHER as better. The orchestrator owns the
//! approval threshold (`overall >= 0.6`). Sentence-level triggers emit
//! categorized issues independent of the numeric scores.

use std::sync::Arc;

use crate::core::lexicon::{
    contains_any, count_hits, density_score, split_sentences, Lexicon,
};
use crate::types::{IssueCategory, NarrativeIssue, NarrativeReport, Severity};
use crate::{
    BIASED_DENSITY_NORM, HARMONY_DENSITY_NORM, NARRATIVE_WEIGHT_BIAS, NARRATIVE_WEIGHT_FACT,
    NARRATIVE_WEIGHT_HARMONY, NARRATIVE_WEIGHT_POLARIZATION, POLARIZING_DENSITY_NORM,
};

/// Longest excerpt carried on an issue
const EXCERPT_MAX_CHARS: usize = 80;

/// Narrative forensics analyzer
#[derive(Debug, Clone)]
pub struct NarrativeAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for NarrativeAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl NarrativeAnalyzer {
    /// Create an analyzer over the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Score the text. Never fails; a text with zero claims scores 1.0 on
    /// fact verification (no penalty for making no claims).
    pub fn evaluate(&self, text: &str) -> NarrativeReport {
        let word_count = text.split_whitespace().count();
        let lower = text.to_lowercase();
        let sentences = split_sentences(text);

        let mut issues = Vec::new();

        let polarization_score = self.polarization(&lower, word_count, &sentences, &mut issues);
        let bias_score = self.bias(&lower, word_count, &sentences, &mut issues);
        let harmony_score = self.harmony(&lower, word_count, &mut issues);
        let fact_score = self.fact_verification(&sentences, &mut issues);
        self.cultural_sensitivity(&sentences, &mut issues);

        let overall_score = NARRATIVE_WEIGHT_POLARIZATION * polarization_score
            + NARRATIVE_WEIGHT_BIAS * bias_score
            + NARRATIVE_WEIGHT_HARMONY * harmony_score
            + NARRATIVE_WEIGHT_FACT * fact_score;

        let feedback = self.generate_feedback(
            polarization_score,
            bias_score,
            harmony_score,
            fact_score,
            overall_score,
        );
        let recommendations = recommendations_from(&issues);

        NarrativeReport {
            polarization_score,
            bias_score,
            harmony_score,
            fact_score,
            overall_score,
            feedback,
            issues,
            recommendations,
        }
    }

    /// Polarizing-lexicon density (inverted) plus sentence-level triggers:
    /// in-group/out-group pronoun pairing and absolute quantifiers
    fn polarization(
        &self,
        text_lower: &str,
        word_count: usize,
        sentences: &[&str],
        issues: &mut Vec<NarrativeIssue>,
    ) -> f64 {
        let hits = count_hits(text_lower, &self.lexicon.polarizing);
        let score = 1.0 - density_score(hits, word_count, POLARIZING_DENSITY_NORM);

        for sentence in sentences {
            let sentence_lower = sentence.to_lowercase();

            if contains_any(&sentence_lower, &self.lexicon.in_group)
                && contains_any(&sentence_lower, &self.lexicon.out_group)
            {
                issues.push(NarrativeIssue::new(
                    IssueCategory::Polarization,
                    Severity::Medium,
                    "In-group and out-group pronouns in the same sentence",
                    excerpt_of(sentence),
                    "Reframe to include all parties in a shared 'we'",
                ));
            }

            for term in &self.lexicon.absolutes {
                if contains_any(&sentence_lower, std::slice::from_ref(term)) {
                    issues.push(NarrativeIssue::new(
                        IssueCategory::Polarization,
                        Severity::Low,
                        format!("Absolute quantifier '{}'", term),
                        excerpt_of(sentence),
                        "Soften absolute claims with qualifiers like 'often' or 'many'",
                    ));
                }
            }
        }

        score
    }

    /// Biased-lexicon density (inverted) plus gender-coded and
    /// civilization-hierarchy sentence triggers
    fn bias(
        &self,
        text_lower: &str,
        word_count: usize,
        sentences: &[&str],
        issues: &mut Vec<NarrativeIssue>,
    ) -> f64 {
        let hits = count_hits(text_lower, &self.lexicon.biased);
        let score = 1.0 - density_score(hits, word_count, BIASED_DENSITY_NORM);

        for sentence in sentences {
            let sentence_lower = sentence.to_lowercase();

            for term in &self.lexicon.gender_coded {
                if contains_any(&sentence_lower, std::slice::from_ref(term)) {
                    issues.push(NarrativeIssue::new(
                        IssueCategory::Bias,
                        Severity::Medium,
                        format!("Gender-coded phrase '{}'", term),
                        excerpt_of(sentence),
                        "Use language that does not prescribe gender roles",
                    ));
                }
            }

            for term in &self.lexicon.hierarchy {
                if contains_any(&sentence_lower, std::slice::from_ref(term)) {
                    issues.push(NarrativeIssue::new(
                        IssueCategory::Bias,
                        Severity::High,
                        format!("Civilization-hierarchy term '{}'", term),
                        excerpt_of(sentence),
                        "Describe cultures without ranking them",
                    ));
                }
            }
        }

        score
    }

    /// Harmony-lexicon density, NOT inverted: more harmony language is better
    fn harmony(
        &self,
        text_lower: &str,
        word_count: usize,
        issues: &mut Vec<NarrativeIssue>,
    ) -> f64 {
        let hits = count_hits(text_lower, &self.lexicon.harmony);
        let score = density_score(hits, word_count, HARMONY_DENSITY_NORM);

        if hits == 0 && word_count >= 20 {
            issues.push(NarrativeIssue::new(
                IssueCategory::Harmony,
                Severity::Low,
                "No community-harmony language found",
                String::new(),
                "Add language about sharing, welcome and belonging",
            ));
        }

        score
    }

    /// Share of evidentiary claims carrying a hedging qualifier; 1.0 when the
    /// text makes no claims
    fn fact_verification(&self, sentences: &[&str], issues: &mut Vec<NarrativeIssue>) -> f64 {
        let mut claims = 0usize;
        let mut hedged = 0usize;

        for sentence in sentences {
            let sentence_lower = sentence.to_lowercase();
            if !contains_any(&sentence_lower, &self.lexicon.claim_cues) {
                continue;
            }
            claims += 1;

            if contains_any(&sentence_lower, &self.lexicon.hedges) {
                hedged += 1;
            } else {
                issues.push(NarrativeIssue::new(
                    IssueCategory::Factual,
                    Severity::Medium,
                    "Unhedged evidentiary claim",
                    excerpt_of(sentence),
                    "Add a qualifier such as 'may' or 'suggests', or cite a source",
                ));
            }
        }

        if claims == 0 {
            1.0
        } else {
            hedged as f64 / claims as f64
        }
    }

    /// Protected-knowledge references without permission context emit a high
    /// severity issue; no numeric sub-score
    fn cultural_sensitivity(&self, sentences: &[&str], issues: &mut Vec<NarrativeIssue>) {
        for sentence in sentences {
            let sentence_lower = sentence.to_lowercase();
            if contains_any(&sentence_lower, &self.lexicon.sensitive_knowledge)
                && !contains_any(&sentence_lower, &self.lexicon.permission_cues)
            {
                issues.push(NarrativeIssue::new(
                    IssueCategory::Cultural,
                    Severity::High,
                    "Reference to protected knowledge without permission context",
                    excerpt_of(sentence),
                    "Note permission, consultation or lineage for this knowledge",
                ));
            }
        }
    }

    fn generate_feedback(
        &self,
        polarization: f64,
        bias: f64,
        harmony: f64,
        fact: f64,
        overall: f64,
    ) -> Vec<String> {
        let mut feedback = Vec::new();

        if polarization < 0.6 {
            feedback.push("Divisive framing detected; soften us-versus-them language".to_string());
        }
        if bias < 0.6 {
            feedback.push("Biased language detected; replace loaded terms with neutral description".to_string());
        }
        if harmony < 0.3 {
            feedback.push("Add community-oriented language about sharing, welcome and belonging".to_string());
        }
        if fact < 0.7 {
            feedback.push("Qualify evidentiary claims with hedging language unless sources are cited".to_string());
        }
        if overall > 0.8 {
            feedback.push("Narrative promotes unity and balanced storytelling".to_string());
        }

        feedback
    }
}

/// One recommendation per issue category present, first suggestion wins
fn recommendations_from(issues: &[NarrativeIssue]) -> Vec<String> {
    let mut seen: Vec<IssueCategory> = Vec::new();
    let mut recommendations = Vec::new();

    for issue in issues {
        if !seen.contains(&issue.category) {
            seen.push(issue.category);
            recommendations.push(issue.suggestion.clone());
        }
    }

    recommendations
}

/// Truncate a sentence to a readable excerpt, clamped to char boundaries
fn excerpt_of(sentence: &str) -> String {
    if sentence.chars().count() <= EXCERPT_MAX_CHARS {
        return sentence.to_string();
    }
    let cut: String = sentence.chars().take(EXCERPT_MAX_CHARS).collect();
    format!("{}...", cut.trim_end())
}

// =============================================================================
// TESTS
// =============================================================================
