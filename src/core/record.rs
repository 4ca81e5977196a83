//! Record sealing: freeze a validation result into a persistable record
//!
//! The core is pure and timestamp-free; sealing happens on the caller side
//! of the boundary. The content digest makes records content-addressed:
//! identical input always yields an identical result, so the digest is a
//! stable cache and audit key.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::types::{ValidationRecord, ValidationResult};
use crate::VERSION;

/// Why a record operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordReason {
    /// Record could not be serialized or deserialized
    SerializeError,
    /// Directory or file could not be written or read
    StorageError,
}

impl RecordReason {
    /// Get reason code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::SerializeError => "RECORD_SERIALIZE_ERROR",
            Self::StorageError => "RECORD_STORAGE_ERROR",
        }
    }
}

impl std::fmt::Display for RecordReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::error::Error for RecordReason {}

/// SHA-256 hex digest of the exact input text
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Seal a result with the current time and the digest of the text it scored
pub fn seal_record(result: ValidationResult, text: &str) -> ValidationRecord {
    let sealed_at = Utc::now();
    let digest = content_digest(text);
    let record_id = format!(
        "rit_{}_{}",
        sealed_at.format("%Y%m%d_%H%M%S"),
        &digest[..8]
    );

    ValidationRecord {
        record_id,
        content_digest: digest,
        sealed_at,
        engine_version: VERSION.to_string(),
        result,
    }
}

/// Save record as pretty JSON under `dir`, returning the file path
pub fn save_record(record: &ValidationRecord, dir: &str) -> Result<String, RecordReason> {
    let filename = format!("{}/{}.json", dir, record.record_id);

    let json = serde_json::to_string_pretty(record).map_err(|_| RecordReason::SerializeError)?;

    std::fs::create_dir_all(dir).map_err(|_| RecordReason::StorageError)?;

    std::fs::write(&filename, json).map_err(|_| RecordReason::StorageError)?;

    Ok(filename)
}

/// Load a record from a JSON file
pub fn load_record(path: &str) -> Result<ValidationRecord, RecordReason> {
    let json = std::fs::read_to_string(path).map_err(|_| RecordReason::StorageError)?;

    serde_json::from_str(&json).map_err(|_| RecordReason::SerializeError)
}

// =============================================================================
// TESTS
// =============================================================================
