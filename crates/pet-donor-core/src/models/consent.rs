//! Consent models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed consent form for one donor.
///
/// A newer consent supersedes this one by replacement; records are never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsentRecord {
    /// Unique consent ID
    pub consent_id: String,
    /// Version of the form the owner signed (e.g., "1.0")
    pub form_version: String,
    /// When the signature was captured
    pub signed_at: DateTime<Utc>,
    /// Opaque reference to the captured signature image
    pub signature_artifact_ref: String,
}

impl ConsentRecord {
    /// Create a consent record for a freshly captured signature.
    pub fn new(
        form_version: impl Into<String>,
        signed_at: DateTime<Utc>,
        signature_artifact_ref: impl Into<String>,
    ) -> Self {
        Self {
            consent_id: uuid::Uuid::new_v4().to_string(),
            form_version: form_version.into(),
            signed_at,
            signature_artifact_ref: signature_artifact_ref.into(),
        }
    }

    /// Serialize to canonical JSON for ledger hashing.
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
