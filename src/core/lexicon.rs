//! Lexicon tables: the term sets every analyzer scans for
//!
//! Term sets are immutable configuration injected into each analyzer at
//! construction time, so tests can substitute synthetic lexicons without
//! touching analyzer logic. `Lexicon::builtin()` returns the shared default.
//!
//! Matching is whole-word (or whole-phrase) and case-insensitive. The legacy
//! substring behavior false-positived on short terms inside unrelated words,
//! so a hit requires non-alphanumeric characters (or text edges) on both
//! sides of the match.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::ReferenceCategory;

/// A sentence template for belief/custom detection.
///
/// Templates match multi-word patterns a flat term list cannot express,
/// e.g. "ancestors (guide|protect|bless)".
#[derive(Debug, Clone)]
pub struct BeliefTemplate {
    pub category: ReferenceCategory,
    pub pattern: Regex,
}

impl BeliefTemplate {
    /// Compile a template; the pattern should carry its own `(?i)` flag
    pub fn new(category: ReferenceCategory, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            category,
            pattern: Regex::new(pattern)?,
        })
    }
}

/// Immutable term sets for all three analyzers.
///
/// All terms are stored lowercase; build lists with [`term_list`].
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    // ESEP
    pub ethical: Vec<String>,
    pub spiritual: Vec<String>,
    pub negative: Vec<String>,

    // Narrative forensics
    pub polarizing: Vec<String>,
    pub biased: Vec<String>,
    pub harmony: Vec<String>,
    pub claim_cues: Vec<String>,
    pub hedges: Vec<String>,
    pub in_group: Vec<String>,
    pub out_group: Vec<String>,
    pub absolutes: Vec<String>,
    pub gender_coded: Vec<String>,
    pub hierarchy: Vec<String>,
    pub sensitive_knowledge: Vec<String>,
    pub permission_cues: Vec<String>,

    // CEDA
    pub traditions: Vec<String>,
    pub languages: Vec<String>,
    pub symbols: Vec<String>,
    pub practices: Vec<String>,
    pub belief_templates: Vec<BeliefTemplate>,
}

impl Lexicon {
    /// The shared built-in lexicon
    pub fn builtin() -> Arc<Lexicon> {
        BUILTIN.clone()
    }

    /// An empty lexicon; starting point for synthetic test lexicons
    pub fn empty() -> Lexicon {
        Lexicon::default()
    }
}

/// Lowercase a list of terms for lexicon storage
pub fn term_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_lowercase()).collect()
}

lazy_static! {
    static ref BUILTIN: Arc<Lexicon> = Arc::new(Lexicon {
        // =====================================================================
        // ESEP: ethical / spiritual / negative vocabulary
        // =====================================================================
        ethical: term_list(&[
            "honor", "respect", "integrity", "responsibility", "stewardship",
            "justice", "fairness", "consent", "care", "accountability",
            "honesty", "reciprocity", "humility", "duty",
        ]),
        spiritual: term_list(&[
            "sacred", "spirit", "soul", "prayer", "divine", "reverence",
            "gratitude", "devotion", "grace", "holy", "transcendent", "blessed",
        ]),
        negative: term_list(&[
            "hate", "harm", "greed", "cruelty", "exploit", "curse",
            "revenge", "malice", "contempt", "ruin",
        ]),

        // =====================================================================
        // Narrative: density lexicons
        // =====================================================================
        polarizing: term_list(&[
            "enemy", "enemies", "traitor", "war", "battle", "evil",
            "corrupt", "extremist", "radical", "invaders", "outsiders",
        ]),
        biased: term_list(&[
            "inferior", "superior", "primitive", "savage", "backward",
            "uncivilized", "lesser", "barbaric",
        ]),
        harmony: term_list(&[
            "together", "community", "unity", "harmony", "peace", "shared",
            "sharing", "collective", "cooperation", "belonging", "welcome",
            "inclusive", "kinship", "solidarity", "gathering",
        ]),

        // =====================================================================
        // Narrative: sentence-level cues
        // =====================================================================
        claim_cues: term_list(&[
            "scientifically", "research shows", "studies show", "studies prove",
            "proven", "ancient wisdom", "it is known", "experts agree",
            "evidence shows",
        ]),
        hedges: term_list(&[
            "may", "might", "could", "suggest", "suggests", "suggested",
            "appear", "appears", "seem", "seems", "perhaps", "possibly",
        ]),
        in_group: term_list(&["we", "us", "our", "ours"]),
        out_group: term_list(&["they", "them", "their", "theirs"]),
        absolutes: term_list(&["always", "never", "everyone", "nobody", "all", "none"]),
        gender_coded: term_list(&[
            "real men", "real women", "man up", "like a girl",
            "women belong", "boys will be boys",
        ]),
        hierarchy: term_list(&[
            "primitive", "savage", "uncivilized", "backward",
            "advanced civilization", "superior culture", "inferior culture",
        ]),
        sensitive_knowledge: term_list(&[
            "ancient wisdom", "traditional knowledge", "sacred knowledge",
            "ancestral teachings",
        ]),
        permission_cues: term_list(&[
            "permission", "consent", "consulted", "consultation", "invited",
            "entrusted", "with the blessing", "shared with",
        ]),

        // =====================================================================
        // CEDA: reference categories
        // =====================================================================
        traditions: term_list(&[
            "ceremony", "ritual", "ancestors", "elders", "lineage", "heritage",
            "solstice", "equinox", "vision quest", "pilgrimage", "initiation",
            "harvest festival", "potlatch",
        ]),
        languages: term_list(&[
            "namaste", "aloha", "ubuntu", "shalom", "salaam", "om", "ayni",
        ]),
        symbols: term_list(&[
            "cedar", "sage", "sweetgrass", "circle", "drum", "feather",
            "altar", "totem", "candle", "mandala", "medicine wheel", "conch",
        ]),
        practices: term_list(&[
            "blessing", "smudging", "chanting", "drumming", "offering",
            "fasting", "meditation", "libation", "procession", "tea ceremony",
        ]),
        belief_templates: vec![
            BeliefTemplate::new(
                ReferenceCategory::Belief,
                r"(?i)\bancestors?\s+(?:spirits?|guides?|guide|protect|bless|watch)",
            )
            .unwrap(),
            BeliefTemplate::new(
                ReferenceCategory::Belief,
                r"(?i)\bspirits?\s+of\s+the\s+(?:land|water|forest|mountain|river)",
            )
            .unwrap(),
            BeliefTemplate::new(
                ReferenceCategory::Belief,
                r"(?i)\bsacred\s+(?:fire|water|earth|grove|mountain|grounds?)",
            )
            .unwrap(),
            BeliefTemplate::new(
                ReferenceCategory::Custom,
                r"(?i)\bpassed\s+down\s+(?:through|from|across)\s+(?:the\s+)?generations?",
            )
            .unwrap(),
            BeliefTemplate::new(
                ReferenceCategory::Custom,
                r"(?i)\bas\s+our\s+(?:people|elders|ancestors)\s+have\s+(?:always\s+)?(?:done|taught|practiced)",
            )
            .unwrap(),
            BeliefTemplate::new(
                ReferenceCategory::Custom,
                r"(?i)\bofferings?\s+(?:to|for)\s+the\s+(?:spirits?|ancestors?|land)",
            )
            .unwrap(),
        ],
    });
}

// =============================================================================
// MATCHING HELPERS
// =============================================================================

/// Byte offsets of whole-word occurrences of `term` in `text_lower`.
///
/// Both arguments must already be lowercase. A match requires the characters
/// adjacent to it to be non-alphanumeric (or text edges), so "sage" does not
/// hit inside "sausage". Phrases match as a whole, spaces included.
pub fn word_match_indices(text_lower: &str, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    text_lower
        .match_indices(term)
        .filter(|(start, matched)| {
            let before_ok = text_lower[..*start]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
            let after_ok = text_lower[start + matched.len()..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
            before_ok && after_ok
        })
        .map(|(start, _)| start)
        .collect()
}

/// Total whole-word hits of every term in `terms`
pub fn count_hits(text_lower: &str, terms: &[String]) -> usize {
    terms
        .iter()
        .map(|term| word_match_indices(text_lower, term).len())
        .sum()
}

/// Does any term in `terms` occur as a whole word?
pub fn contains_any(text_lower: &str, terms: &[String]) -> bool {
    terms
        .iter()
        .any(|term| !word_match_indices(text_lower, term).is_empty())
}

/// Density score: hits normalized by `norm * word_count` (floored at 1),
/// capped at 1.0. The floor keeps degenerate inputs from dividing by zero.
pub fn density_score(hits: usize, word_count: usize, norm: f64) -> f64 {
    (hits as f64 / (norm * word_count as f64).max(1.0)).min(1.0)
}

/// Snippet of `text` around the byte range `start..start+len`, clamped to
/// char boundaries
pub fn context_snippet(text: &str, start: usize, len: usize) -> String {
    const RADIUS: usize = 30;

    let mut begin = start.saturating_sub(RADIUS);
    while !text.is_char_boundary(begin) {
        begin -= 1;
    }
    let mut end = (start + len + RADIUS).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    text[begin..end].trim().to_string()
}

/// Split text into sentences on `.`, `!`, `?`
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
