//! Append-only consent history with a hash chain.
//!
//! Each entry hashes the donor's pet id, the previous entry's hash and the
//! record's canonical JSON. Editing or dropping any earlier entry breaks every
//! hash after it, and a ledger relabelled to another pet fails at entry 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::ConsentPolicy;
use crate::eligibility::EligibilityResult;
use crate::models::{ConsentRecord, ConsentStatus};

/// Ledger errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hash chain broken at entry {0}")]
    BrokenChain(usize),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

/// One consent in the history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    /// Position in the ledger, starting at 0
    pub sequence: usize,
    /// The consent as signed
    pub record: ConsentRecord,
    /// Hash of the preceding entry (None for the first)
    pub previous_hash: Option<String>,
    /// Hash of this entry
    pub entry_hash: String,
}

/// Consent history for a single donor. The last entry is the active consent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsentLedger {
    pet_id: String,
    entries: Vec<LedgerEntry>,
}

impl ConsentLedger {
    /// Create an empty ledger for a donor.
    pub fn new(pet_id: impl Into<String>) -> Self {
        Self {
            pet_id: pet_id.into(),
            entries: Vec::new(),
        }
    }

    /// Append a consent, superseding the active one.
    pub fn record(&mut self, record: ConsentRecord) -> LedgerResult<&LedgerEntry> {
        let previous_hash = self.entries.last().map(|e| e.entry_hash.clone());
        let entry_hash = chain_hash(&self.pet_id, previous_hash.as_deref(), &record)?;
        let sequence = self.entries.len();

        tracing::info!(
            pet_id = %self.pet_id,
            consent_id = %record.consent_id,
            form_version = %record.form_version,
            sequence,
            "recorded consent"
        );

        self.entries.push(LedgerEntry {
            sequence,
            record,
            previous_hash,
            entry_hash,
        });

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// The currently active consent, if any.
    pub fn active(&self) -> Option<&ConsentRecord> {
        self.entries.last().map(|e| &e.record)
    }

    /// Check the active consent under a policy.
    pub fn active_status(
        &self,
        policy: &ConsentPolicy,
        now: DateTime<Utc>,
    ) -> EligibilityResult<ConsentStatus> {
        policy.check(self.active(), now)
    }

    /// All entries, oldest first.
    pub fn history(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn pet_id(&self) -> &str {
        &self.pet_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recompute every hash and check the links.
    pub fn verify_chain(&self) -> LedgerResult<()> {
        let mut previous: Option<&str> = None;

        for (sequence, entry) in self.entries.iter().enumerate() {
            if entry.sequence != sequence || entry.previous_hash.as_deref() != previous {
                return Err(LedgerError::BrokenChain(sequence));
            }
            if chain_hash(&self.pet_id, previous, &entry.record)? != entry.entry_hash {
                return Err(LedgerError::BrokenChain(sequence));
            }
            previous = Some(&entry.entry_hash);
        }

        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load from JSON and verify the chain.
    pub fn from_json(json: &str) -> LedgerResult<Self> {
        let ledger: ConsentLedger = serde_json::from_str(json)?;
        ledger.verify_chain()?;
        Ok(ledger)
    }
}

fn chain_hash(
    pet_id: &str,
    previous: Option<&str>,
    record: &ConsentRecord,
) -> Result<String, serde_json::Error> {
    let payload = record.to_canonical_json()?;
    let mut hasher = Sha256::new();
    hasher.update(pet_id.as_bytes());
    hasher.update(b":");
    hasher.update(previous.unwrap_or_default().as_bytes());
    hasher.update(b":");
    hasher.update(payload.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
