//! Sealed validation records: the caller-side freeze of a result
//!
//! The core returns plain `ValidationResult`s with no timestamp. A record
//! stamps the time and the content digest so the persistence layer can cache
//! and audit by digest (identical input always yields an identical result).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ValidationResult;

/// A persistable record of one validation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Stable id built from the seal time and digest prefix
    pub record_id: String,
    /// SHA-256 hex digest of the exact input text
    pub content_digest: String,
    /// When the record was sealed (caller side of the boundary)
    pub sealed_at: DateTime<Utc>,
    /// Engine version that produced the result
    pub engine_version: String,
    pub result: ValidationResult,
}
