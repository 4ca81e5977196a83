//! CEDA analyzer: cultural-reference detection, diversity, authenticity
//!
//! The gated score is the distinct reference COUNT (higher is better). The
//! orchestrator owns the approval threshold (`count >= 2`).

use std::sync::Arc;

use crate::core::lexicon::{context_snippet, word_match_indices, Lexicon};
use crate::types::{CedaReport, CulturalReference, ReferenceCategory};
use crate::{
    CONTEXT_BONUS, CONTEXT_BONUS_MIN_CHARS, DENSITY_PENALTY_FACTOR, DENSITY_PENALTY_THRESHOLD,
    LEXICON_CONFIDENCE, TEMPLATE_CONFIDENCE,
};

/// Cultural Expression Detection Algorithm analyzer
#[derive(Debug, Clone)]
pub struct CedaAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for CedaAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl CedaAnalyzer {
    /// Create an analyzer over the given lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Detect cultural references and compute diversity and authenticity.
    /// Never fails; zero references is a valid (gate-failing) result.
    pub fn evaluate(&self, text: &str) -> CedaReport {
        let word_count = text.split_whitespace().count();
        let lower = text.to_lowercase();

        let mut references = Vec::new();
        references.extend(self.scan_category(&lower, ReferenceCategory::Tradition, &self.lexicon.traditions));
        references.extend(self.scan_category(&lower, ReferenceCategory::Language, &self.lexicon.languages));
        references.extend(self.scan_category(&lower, ReferenceCategory::Symbol, &self.lexicon.symbols));
        references.extend(self.scan_category(&lower, ReferenceCategory::Practice, &self.lexicon.practices));
        references.extend(self.scan_templates(&lower));

        let diversity = diversity_index(&references);
        let authenticity = authenticity_index(&references, word_count);
        let feedback = self.generate_feedback(references.len(), diversity, authenticity);

        CedaReport {
            reference_count: references.len(),
            references,
            diversity,
            authenticity,
            word_count,
            feedback,
        }
    }

    /// Every DISTINCT matching term contributes one reference; repeats of the
    /// same term do not
    fn scan_category(
        &self,
        text_lower: &str,
        category: ReferenceCategory,
        terms: &[String],
    ) -> Vec<CulturalReference> {
        terms
            .iter()
            .filter_map(|term| {
                let indices = word_match_indices(text_lower, term);
                indices.first().map(|&start| CulturalReference {
                    category,
                    matched_text: term.clone(),
                    confidence: LEXICON_CONFIDENCE,
                    context: context_snippet(text_lower, start, term.len()),
                })
            })
            .collect()
    }

    /// Belief/custom sentence templates; each template fires at most once
    fn scan_templates(&self, text_lower: &str) -> Vec<CulturalReference> {
        self.lexicon
            .belief_templates
            .iter()
            .filter_map(|template| {
                template.pattern.find(text_lower).map(|m| CulturalReference {
                    category: template.category,
                    matched_text: m.as_str().to_string(),
                    confidence: TEMPLATE_CONFIDENCE,
                    context: context_snippet(text_lower, m.start(), m.len()),
                })
            })
            .collect()
    }

    fn generate_feedback(&self, count: usize, diversity: f64, authenticity: f64) -> Vec<String> {
        let mut feedback = Vec::new();

        if count < 2 {
            feedback.push(
                "At least two cultural references are required; name the traditions, symbols or practices the ritual draws on"
                    .to_string(),
            );
        } else if count < 5 {
            feedback.push(
                "Consider enriching the document with more cultural references".to_string(),
            );
        } else {
            feedback.push(format!("Rich cultural grounding with {} references", count));
        }

        if count > 0 {
            if diversity < 0.3 {
                feedback.push(
                    "References cluster in one category; draw from a wider range of traditions, symbols and practices"
                        .to_string(),
                );
            } else if diversity > 0.7 {
                feedback.push("Culturally diverse expression across categories".to_string());
            }

            if authenticity < 0.5 {
                feedback.push(
                    "Cultural references need more grounding context; show how each is respectfully used"
                        .to_string(),
                );
            } else if authenticity > 0.8 {
                feedback.push("References are well contextualized and respectfully used".to_string());
            }
        }

        feedback
    }
}

/// Category order for entropy accumulation; fixed so summation order (and
/// therefore the exact float result) never varies between runs
const CATEGORY_ORDER: [ReferenceCategory; 6] = [
    ReferenceCategory::Tradition,
    ReferenceCategory::Language,
    ReferenceCategory::Symbol,
    ReferenceCategory::Practice,
    ReferenceCategory::Belief,
    ReferenceCategory::Custom,
];

/// Normalized Shannon entropy over the category distribution of references.
///
/// Categories with zero occurrences are excluded from the entropy base; 0.0
/// when no references are found or all fall in a single category.
fn diversity_index(references: &[CulturalReference]) -> f64 {
    let counts: Vec<usize> = CATEGORY_ORDER
        .iter()
        .map(|category| {
            references
                .iter()
                .filter(|reference| reference.category == *category)
                .count()
        })
        .filter(|&count| count > 0)
        .collect();

    let distinct = counts.len();
    if distinct < 2 {
        return 0.0;
    }

    let total = references.len() as f64;
    let entropy: f64 = counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum();

    entropy / (distinct as f64).ln()
}

/// Confidence-weighted mean with a context bonus, then a density penalty
/// once references exceed 10 per 100 words (anti-listing heuristic)
fn authenticity_index(references: &[CulturalReference], word_count: usize) -> f64 {
    if references.is_empty() {
        return 0.0;
    }

    let sum: f64 = references
        .iter()
        .map(|reference| {
            let bonus = if reference.context.chars().count() > CONTEXT_BONUS_MIN_CHARS {
                CONTEXT_BONUS
            } else {
                0.0
            };
            (reference.confidence + bonus).min(1.0)
        })
        .sum();

    let mut score = sum / references.len() as f64;

    let density = references.len() as f64 / word_count.max(1) as f64;
    if density > DENSITY_PENALTY_THRESHOLD {
        score *= DENSITY_PENALTY_FACTOR;
    }

    score.min(1.0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lexicon::term_list;

    #[test]
    fn test_empty_input_yields_zero_references() {
        let analyzer = CedaAnalyzer::default();
        let report = analyzer.evaluate("");
        assert_eq!(report.reference_count, 0);
        assert_eq!(report.diversity, 0.0);
        assert_eq!(report.authenticity, 0.0);
    }

    #[test]
    fn test_distinct_terms_counted_once() {
        let analyzer = CedaAnalyzer::default();
        let report = analyzer.evaluate("cedar cedar cedar");
        assert_eq!(report.reference_count, 1);
        assert_eq!(report.references[0].matched_text, "cedar");
        assert_eq!(report.references[0].confidence, 0.9);
    }

    #[test]
    fn test_lexicon_and_template_confidences() {
        let analyzer = CedaAnalyzer::default();
        let report = analyzer
            .evaluate("We burn cedar while the ancestors bless the gathering at the river");
        let lexicon_ref = report
            .references
            .iter()
            .find(|r| r.matched_text == "cedar")
            .expect("cedar reference");
        assert_eq!(lexicon_ref.confidence, 0.9);

        let template_ref = report
            .references
            .iter()
            .find(|r| r.category == ReferenceCategory::Belief)
            .expect("belief template reference");
        assert_eq!(template_ref.confidence, 0.7);
        assert!(template_ref.matched_text.contains("ancestors"));
    }

    #[test]
    fn test_diversity_zero_for_single_category() {
        let analyzer = CedaAnalyzer::default();
        let report = analyzer.evaluate("cedar and sage on the altar");
        // cedar, sage, altar: all Symbol
        assert_eq!(report.reference_count, 3);
        assert_eq!(report.diversity, 0.0);
    }

    #[test]
    fn test_diversity_positive_across_categories() {
        let analyzer = CedaAnalyzer::default();
        let report = analyzer.evaluate("The ceremony opens with cedar smoke and a blessing");
        // ceremony: Tradition, cedar: Symbol, blessing: Practice
        assert!(report.reference_count >= 3);
        assert!(
            report.diversity > 0.9,
            "Even three-way split should be near 1.0, got {}",
            report.diversity
        );
    }

    #[test]
    fn test_diversity_never_decreases_with_new_category() {
        let analyzer = CedaAnalyzer::default();
        let base = analyzer.evaluate("cedar and sage carried to the altar for the ceremony");
        let extended =
            analyzer.evaluate("cedar and sage carried to the altar for the ceremony and blessing");
        assert!(extended.reference_count > base.reference_count);
        assert!(
            extended.diversity >= base.diversity,
            "Adding a new category must not decrease diversity: {} -> {}",
            base.diversity,
            extended.diversity
        );
    }

    #[test]
    fn test_context_bonus_raises_authenticity() {
        let lexicon = Arc::new(Lexicon {
            symbols: term_list(&["cedar"]),
            ..Lexicon::empty()
        });
        let analyzer = CedaAnalyzer::new(lexicon);

        // Bare term: snippet is just the word, no bonus
        let bare = analyzer.evaluate("cedar");
        // Embedded term: long surrounding context earns the bonus
        let embedded = analyzer.evaluate(
            "the old cedar standing at the edge of the meadow where the families gather every spring season",
        );
        assert!(
            embedded.authenticity > bare.authenticity,
            "Context bonus should raise authenticity: {} vs {}",
            embedded.authenticity,
            bare.authenticity
        );
    }

    #[test]
    fn test_density_penalty_for_term_listing() {
        let analyzer = CedaAnalyzer::default();
        // 3 references in 3 words: density 1.0, well over the threshold
        let listed = analyzer.evaluate("cedar sage drum");
        // Same references embedded in prose below the threshold
        let prose = analyzer.evaluate(
            "We carry cedar and sage to the eastern meadow and set the drum beside the fire \
             while the families settle into quiet rows beneath the open sky to wait together \
             for first light",
        );
        assert!(
            listed.authenticity < prose.authenticity,
            "Listing should be penalized: {} vs {}",
            listed.authenticity,
            prose.authenticity
        );
    }

    #[test]
    fn test_feedback_hard_requirement_under_two() {
        let analyzer = CedaAnalyzer::default();
        let report = analyzer.evaluate("cedar smoke drifts");
        assert_eq!(report.reference_count, 1);
        assert!(report.feedback.iter().any(|f| f.contains("required")));
    }

    #[test]
    fn test_feedback_affirmation_at_five() {
        let analyzer = CedaAnalyzer::default();
        let report =
            analyzer.evaluate("The ceremony gathers cedar, sage, a drum and a blessing by the circle");
        assert!(report.reference_count >= 5);
        assert!(report
            .feedback
            .iter()
            .any(|f| f.contains("Rich cultural grounding")));
    }

    #[test]
    fn test_determinism() {
        let analyzer = CedaAnalyzer::default();
        let text = "The ceremony opens with cedar smoke, sage, and a blessing in the circle";
        let a = analyzer.evaluate(text);
        let b = analyzer.evaluate(text);
        assert_eq!(a.reference_count, b.reference_count);
        assert_eq!(a.diversity, b.diversity);
        assert_eq!(a.authenticity, b.authenticity);
    }
}
