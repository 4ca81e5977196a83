//! ESEP analyzer: ethical/spiritual balance and negative-content density
//!
//! The composite is inverted relative to the other analyzers: LOWER is
//! better. The orchestrator owns the approval threshold (`score <= 0.7`).

use std::sync::Arc;

use crate::core::lexicon::{count_hits, density_score, Lexicon};
use crate::types::EsepReport;
use crate::{
    ESEP_PRESENCE_CEILING, ESEP_PRESENCE_SLOPE, ESEP_WEIGHT_IMBALANCE, ESEP_WEIGHT_NEGATIVE,
    ESEP_WEIGHT_PRESENCE, ETHICAL_DENSITY_NORM, NEGATIVE_DENSITY_NORM,
};

/// Ethical-Spiritual Evaluation Protocol analyzer
#[derive(Debug, Clone)]
pub struct EsepAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for EsepAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl EsepAnalyzer {
    /// Create an analyzer over the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Score the text. Never fails; empty input returns the worst-case
    /// sentinel (score 1.0), not an error.
    pub fn evaluate(&self, text: &str) -> EsepReport {
        let text = text.trim();

        if text.is_empty() {
            return EsepReport {
                score: 1.0,
                ethical_score: 0.0,
                spiritual_score: 0.0,
                negative_score: 0.0,
                balance_score: 0.0,
                word_count: 0,
                feedback: vec!["Empty input - nothing to evaluate".to_string()],
            };
        }

        let word_count = text.split_whitespace().count();
        let lower = text.to_lowercase();

        let ethical_hits = count_hits(&lower, &self.lexicon.ethical);
        let spiritual_hits = count_hits(&lower, &self.lexicon.spiritual);
        let negative_hits = count_hits(&lower, &self.lexicon.negative);

        let ethical_score = density_score(ethical_hits, word_count, ETHICAL_DENSITY_NORM);
        let spiritual_score = density_score(spiritual_hits, word_count, ETHICAL_DENSITY_NORM);
        let negative_score = density_score(negative_hits, word_count, NEGATIVE_DENSITY_NORM);

        // 1.0 = perfectly balanced presence of both dimensions
        let balance_score = 1.0 - (ethical_score - spiritual_score).abs();

        let presence_term = (ESEP_PRESENCE_CEILING
            - ESEP_PRESENCE_SLOPE * (ethical_score + spiritual_score))
            .max(0.0);

        let score = ESEP_WEIGHT_IMBALANCE * (1.0 - balance_score)
            + ESEP_WEIGHT_NEGATIVE * negative_score
            + ESEP_WEIGHT_PRESENCE * presence_term;

        let feedback =
            self.generate_feedback(score, ethical_score, spiritual_score, negative_score, balance_score);

        EsepReport {
            score,
            ethical_score,
            spiritual_score,
            negative_score,
            balance_score,
            word_count,
            feedback,
        }
    }

    /// Threshold-driven feedback; multiple rules may fire, insertion order
    fn generate_feedback(
        &self,
        score: f64,
        ethical: f64,
        spiritual: f64,
        negative: f64,
        balance: f64,
    ) -> Vec<String> {
        let mut feedback = Vec::new();

        if ethical < 0.1 {
            feedback.push(
                "Consider weaving in language about ethical commitments such as respect, consent, or stewardship"
                    .to_string(),
            );
        }
        if spiritual < 0.1 {
            feedback.push(
                "Consider grounding the ritual in spiritual language such as reverence, gratitude, or the sacred"
                    .to_string(),
            );
        }
        if negative > 0.3 {
            feedback.push(
                "Reduce negative or harmful language; it overwhelms the document's intent".to_string(),
            );
        }
        if balance < 0.5 && ethical > 0.0 && spiritual > 0.0 {
            feedback.push(
                "Ethical and spiritual themes are unevenly weighted; bring them into balance".to_string(),
            );
        }
        if score <= 0.3 {
            feedback.push("Strong ethical-spiritual balance".to_string());
        }

        feedback
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::term_list;

    #[test]
    fn test_empty_input_sentinel() {
        let analyzer = EsepAnalyzer::default();
        let report = analyzer.evaluate("");
        assert_eq!(report.score, 1.0);
        assert_eq!(report.word_count, 0);
        assert!(report
            .feedback
            .iter()
            .any(|f| f.to_lowercase().contains("empty input")));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let analyzer = EsepAnalyzer::default();
        let report = analyzer.evaluate("   \n\t  ");
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn test_balanced_text_scores_low() {
        let analyzer = EsepAnalyzer::default();
        // One ethical and one spiritual term in ten words: both densities 1.0
        let report = analyzer.evaluate(
            "We honor the land with respect and sacred gratitude, holding integrity close",
        );
        assert!(
            report.score <= 0.3,
            "Balanced text should score low, got {}",
            report.score
        );
        assert!((report.balance_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_terms_raise_score() {
        let analyzer = EsepAnalyzer::default();
        let neutral = analyzer.evaluate("The river flows down the valley in the morning light");
        let negative =
            analyzer.evaluate("The river carries greed and cruelty and harm down the valley today");
        assert!(
            negative.score > neutral.score,
            "Negative terms should raise the score: {} vs {}",
            negative.score,
            neutral.score
        );
    }

    #[test]
    fn test_imbalance_raises_score() {
        let analyzer = EsepAnalyzer::default();
        // All ethical, no spiritual
        let lopsided =
            analyzer.evaluate("honor respect integrity justice fairness care honesty duty humility stewardship");
        // Even mix
        let balanced = analyzer.evaluate("honor sacred respect spirit justice prayer care divine");
        assert!(
            lopsided.score > balanced.score,
            "Imbalance should raise the score: {} vs {}",
            lopsided.score,
            balanced.score
        );
    }

    #[test]
    fn test_densities_cap_at_one() {
        let analyzer = EsepAnalyzer::default();
        let report = analyzer.evaluate("honor honor honor honor honor");
        assert_eq!(report.ethical_score, 1.0);
    }

    #[test]
    fn test_low_dimension_feedback_fires() {
        let analyzer = EsepAnalyzer::default();
        let report = analyzer.evaluate("The river flows down the valley");
        assert!(report.feedback.iter().any(|f| f.contains("ethical")));
        assert!(report.feedback.iter().any(|f| f.contains("spiritual")));
    }

    #[test]
    fn test_synthetic_lexicon_substitution() {
        let lexicon = Arc::new(Lexicon {
            ethical: term_list(&["zorp"]),
            spiritual: term_list(&["quux"]),
            ..Lexicon::empty()
        });
        let analyzer = EsepAnalyzer::new(lexicon);
        let report = analyzer.evaluate("zorp quux zorp quux zorp quux zorp quux zorp quux");
        assert_eq!(report.ethical_score, 1.0);
        assert_eq!(report.spiritual_score, 1.0);
        assert!((report.balance_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let analyzer = EsepAnalyzer::default();
        let text = "We honor the sacred grove with respect and gratitude";
        let a = analyzer.evaluate(text);
        let b = analyzer.evaluate(text);
        assert_eq!(a.score, b.score);
        assert_eq!(a.feedback, b.feedback);
    }
}
