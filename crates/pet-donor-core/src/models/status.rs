//! Eligibility and consent status values produced by the decision engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduling state of a donor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EligibilityState {
    /// May schedule a donation now
    Eligible,
    /// Blocked by something resolvable (hold or re-check in progress)
    Pending,
    /// Donation interval has not yet elapsed
    Ineligible,
    /// Explicit hold with a known expiry
    TemporaryIneligible,
    /// Medical re-check required before any donation
    ReVerificationRequired,
}

impl EligibilityState {
    pub const ALL: [EligibilityState; 5] = [
        EligibilityState::Eligible,
        EligibilityState::Pending,
        EligibilityState::Ineligible,
        EligibilityState::TemporaryIneligible,
        EligibilityState::ReVerificationRequired,
    ];

    /// Display vocabulary name (e.g., "temporaryIneligible").
    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityState::Eligible => "eligible",
            EligibilityState::Pending => "pending",
            EligibilityState::Ineligible => "ineligible",
            EligibilityState::TemporaryIneligible => "temporaryIneligible",
            EligibilityState::ReVerificationRequired => "reVerificationRequired",
        }
    }
}

/// Output of the eligibility engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityStatus {
    /// Resulting state
    pub state: EligibilityState,
    /// Earliest time the donor may donate, when known
    pub next_eligible_date: Option<DateTime<Utc>>,
}

impl EligibilityStatus {
    pub fn eligible() -> Self {
        Self {
            state: EligibilityState::Eligible,
            next_eligible_date: None,
        }
    }

    pub fn ineligible_until(next: DateTime<Utc>) -> Self {
        Self {
            state: EligibilityState::Ineligible,
            next_eligible_date: Some(next),
        }
    }

    pub fn on_hold_until(until: DateTime<Utc>) -> Self {
        Self {
            state: EligibilityState::TemporaryIneligible,
            next_eligible_date: Some(until),
        }
    }

    pub fn re_verification_required() -> Self {
        Self {
            state: EligibilityState::ReVerificationRequired,
            next_eligible_date: None,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.state == EligibilityState::Eligible
    }
}

/// Output of the consent validity checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentStatus {
    Valid,
    /// Validity window elapsed
    Expired,
    /// Signed form differs from the required version
    OutdatedVersion,
    /// No consent on file
    Missing,
}

impl ConsentStatus {
    pub const ALL: [ConsentStatus; 4] = [
        ConsentStatus::Valid,
        ConsentStatus::Expired,
        ConsentStatus::OutdatedVersion,
        ConsentStatus::Missing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Valid => "valid",
            ConsentStatus::Expired => "expired",
            ConsentStatus::OutdatedVersion => "outdatedVersion",
            ConsentStatus::Missing => "missing",
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ConsentStatus::Valid)
    }
}
