//! Ritualgate: validation core for submitted ritual documents
//!
//! Three analyzers (ESEP, CEDA, narrative forensics) score the same text
//! independently; the orchestrator joins them into one approval decision.

pub mod core;
pub mod types;

// =============================================================================
// APPROVAL GATES
// =============================================================================

/// Maximum ESEP score for approval (lower is better, inclusive)
pub const ESEP_APPROVAL_MAX: f64 = 0.7;

/// Minimum distinct cultural references for approval
pub const CEDA_MIN_REFERENCES: usize = 2;

/// Minimum narrative overall score for approval (higher is better, inclusive)
pub const NARRATIVE_APPROVAL_MIN: f64 = 0.6;

// =============================================================================
// ESEP COMPOSITE WEIGHTS (sum = 1.0)
// =============================================================================

/// Weight of the ethical/spiritual imbalance term
pub const ESEP_WEIGHT_IMBALANCE: f64 = 0.4;

/// Weight of the negative-content term
pub const ESEP_WEIGHT_NEGATIVE: f64 = 0.3;

/// Weight of the low-presence term
pub const ESEP_WEIGHT_PRESENCE: f64 = 0.3;

/// Ceiling of the low-presence term before weighting
pub const ESEP_PRESENCE_CEILING: f64 = 0.3;

/// Slope applied to combined ethical+spiritual density in the presence term
pub const ESEP_PRESENCE_SLOPE: f64 = 0.15;

// =============================================================================
// DENSITY DENOMINATORS (fraction of word count, floored at 1)
// =============================================================================

/// Ethical and spiritual terms saturate at 1 hit per 10 words
pub const ETHICAL_DENSITY_NORM: f64 = 0.1;

/// Negative terms saturate at 1 hit per 20 words (twice as sensitive)
pub const NEGATIVE_DENSITY_NORM: f64 = 0.05;

/// Polarizing terms saturate at 1 hit per 10 words
pub const POLARIZING_DENSITY_NORM: f64 = 0.1;

/// Biased terms saturate at 1 hit per 20 words
pub const BIASED_DENSITY_NORM: f64 = 0.05;

/// Harmony terms saturate at 1 hit per 10 words
pub const HARMONY_DENSITY_NORM: f64 = 0.1;

// =============================================================================
// NARRATIVE COMPOSITE WEIGHTS (sum = 1.0)
// =============================================================================

pub const NARRATIVE_WEIGHT_POLARIZATION: f64 = 0.3;
pub const NARRATIVE_WEIGHT_BIAS: f64 = 0.3;
pub const NARRATIVE_WEIGHT_HARMONY: f64 = 0.2;
pub const NARRATIVE_WEIGHT_FACT: f64 = 0.2;

// =============================================================================
// CEDA CONFIDENCE MODEL
// =============================================================================

/// Confidence assigned to whole-word lexicon matches
pub const LEXICON_CONFIDENCE: f64 = 0.9;

/// Confidence assigned to belief/custom sentence-template matches
pub const TEMPLATE_CONFIDENCE: f64 = 0.7;

/// Authenticity bonus for a reference whose context snippet exceeds the floor
pub const CONTEXT_BONUS: f64 = 0.1;

/// Context length (chars) a reference must exceed to earn the bonus
pub const CONTEXT_BONUS_MIN_CHARS: usize = 20;

/// Authenticity multiplier once reference density crosses the spam threshold
pub const DENSITY_PENALTY_FACTOR: f64 = 0.8;

/// Spam threshold: more than 10 references per 100 words
pub const DENSITY_PENALTY_THRESHOLD: f64 = 0.1;

// =============================================================================
// INGRESS LIMITS (enforced by the caller side, never by the core)
// =============================================================================

/// Minimum body length in characters for a submitted document
pub const MIN_BODY_CHARS: usize = 100;

/// Maximum accepted document size in bytes (10 MB)
pub const MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
