//! Donor models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::species::Species;

/// A registered donor pet, as read by the eligibility engine.
///
/// The engine never mutates a donor. `last_donation_date` changes only when an
/// appointment completes; the hold and re-verification flag change only through
/// vet sign-off or an admin action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonorRecord {
    /// Local UUID - generated when the pet profile is registered
    pub pet_id: String,
    /// Donor species
    pub species: Species,
    /// Most recent completed donation (None if never donated)
    pub last_donation_date: Option<DateTime<Utc>>,
    /// Administrative hold; blocks the donor while in the future
    pub temporary_hold_until: Option<DateTime<Utc>>,
    /// Medical re-check required before any further donation
    pub re_verification_required: bool,
}

impl DonorRecord {
    /// Register a new donor that has never donated.
    pub fn new(species: Species) -> Self {
        Self {
            pet_id: uuid::Uuid::new_v4().to_string(),
            species,
            last_donation_date: None,
            temporary_hold_until: None,
            re_verification_required: false,
        }
    }

    /// Set the most recent donation date.
    pub fn with_last_donation(mut self, at: DateTime<Utc>) -> Self {
        self.last_donation_date = Some(at);
        self
    }

    /// Place an administrative hold until the given time.
    pub fn with_hold_until(mut self, until: DateTime<Utc>) -> Self {
        self.temporary_hold_until = Some(until);
        self
    }

    /// Flag the donor for medical re-verification.
    pub fn requiring_re_verification(mut self) -> Self {
        self.re_verification_required = true;
        self
    }

    /// Check if this donor has ever completed a donation.
    pub fn has_donated(&self) -> bool {
        self.last_donation_date.is_some()
    }

    /// Check if an administrative hold is still in force at `now`.
    pub fn is_on_hold(&self, now: DateTime<Utc>) -> bool {
        self.temporary_hold_until.is_some_and(|until| until > now)
    }
}
