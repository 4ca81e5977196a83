//! Core modules for ritualgate

pub mod lexicon;
pub mod esep;
pub mod ceda;
pub mod narrative;
pub mod orchestrator;
pub mod grc;
pub mod record;

pub use lexicon::{BeliefTemplate, Lexicon};
pub use esep::EsepAnalyzer;
pub use ceda::CedaAnalyzer;
pub use narrative::NarrativeAnalyzer;
pub use orchestrator::{passes_gates, Validator};
pub use grc::{parse_grc, IngressReason};
pub use record::{content_digest, load_record, save_record, seal_record, RecordReason};
