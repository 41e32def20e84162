//! Eligibility rule engine.

use chrono::{DateTime, Utc};

use super::EligibilityResult;
use crate::config::DonationIntervals;
use crate::models::{DonorRecord, EligibilityState, EligibilityStatus};

/// Evaluate a donor against an interval table at `now`.
pub fn evaluate(
    donor: &DonorRecord,
    now: DateTime<Utc>,
    intervals: &DonationIntervals,
) -> EligibilityResult<EligibilityStatus> {
    // Resolve first so a bad table fails for every donor of the species.
    let interval = intervals.interval_for(donor.species)?;

    let status = if donor.re_verification_required {
        EligibilityStatus::re_verification_required()
    } else if let Some(until) = donor
        .temporary_hold_until
        .filter(|_| donor.is_on_hold(now))
    {
        EligibilityStatus::on_hold_until(until)
    } else {
        match donor.last_donation_date {
            None => EligibilityStatus::eligible(),
            Some(last) => match last.checked_add_signed(interval) {
                Some(next) if now >= next => EligibilityStatus::eligible(),
                Some(next) => EligibilityStatus::ineligible_until(next),
                // Next date lies past the representable calendar.
                None => EligibilityStatus {
                    state: EligibilityState::Ineligible,
                    next_eligible_date: None,
                },
            },
        }
    };

    tracing::debug!(
        pet_id = %donor.pet_id,
        species = %donor.species,
        state = status.state.as_str(),
        next_eligible = ?status.next_eligible_date,
        "evaluated donor eligibility"
    );

    Ok(status)
}

/// Eligibility engine bound to an interval table snapshot.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    intervals: DonationIntervals,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(DonationIntervals::default())
    }
}

impl EligibilityEngine {
    /// Create an engine over the given intervals.
    pub fn new(intervals: DonationIntervals) -> Self {
        Self { intervals }
    }

    /// Evaluate one donor.
    pub fn evaluate(
        &self,
        donor: &DonorRecord,
        now: DateTime<Utc>,
    ) -> EligibilityResult<EligibilityStatus> {
        evaluate(donor, now, &self.intervals)
    }

    /// Get the interval table.
    pub fn intervals(&self) -> &DonationIntervals {
        &self.intervals
    }
}
