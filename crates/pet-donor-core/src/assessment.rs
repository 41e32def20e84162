//! Full donor assessment: eligibility, consent, and the combined label.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ProgramConfig;
use crate::consent::check as check_consent;
use crate::eligibility::{evaluate, EligibilityResult};
use crate::models::{ConsentRecord, ConsentStatus, DonorRecord, EligibilityStatus};
use crate::presentation::{present, DisplayLabel};

/// Everything the scheduling screen needs for one donor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorAssessment {
    pub pet_id: String,
    pub eligibility: EligibilityStatus,
    pub consent: ConsentStatus,
    pub label: DisplayLabel,
}

impl DonorAssessment {
    /// Check if an appointment may be booked now.
    pub fn can_schedule(&self) -> bool {
        self.label.allows_scheduling()
    }
}

/// Assess a donor against a configuration snapshot.
pub fn assess(
    donor: &DonorRecord,
    consent: Option<&ConsentRecord>,
    now: DateTime<Utc>,
    config: &ProgramConfig,
) -> EligibilityResult<DonorAssessment> {
    let eligibility = evaluate(donor, now, config.intervals())?;
    let consent = check_consent(
        consent,
        now,
        &config.consent_form_version,
        config.consent_validity_days,
    )?;
    let label = present(&eligibility, consent);

    Ok(DonorAssessment {
        pet_id: donor.pet_id.clone(),
        eligibility,
        consent,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EligibilityState, Species};
    use crate::presentation::{BadgeVariant, ConsentAction};
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_eligible_donor_with_valid_consent_can_schedule() {
        let config = ProgramConfig::default();
        let donor = DonorRecord::new(Species::Dog).with_last_donation(date(2024, 1, 1));
        let consent = ConsentRecord::new("1.0", date(2024, 1, 1), "sig-1");

        let assessment = assess(&donor, Some(&consent), date(2024, 2, 26), &config).unwrap();

        assert_eq!(assessment.pet_id, donor.pet_id);
        assert!(assessment.eligibility.is_eligible());
        assert_eq!(assessment.consent, ConsentStatus::Valid);
        assert_eq!(assessment.label.variant, BadgeVariant::Eligible);
        assert!(assessment.can_schedule());
    }

    #[test]
    fn test_missing_consent_blocks_scheduling() {
        let config = ProgramConfig::default();
        let donor = DonorRecord::new(Species::Cat);

        let assessment = assess(&donor, None, date(2024, 2, 26), &config).unwrap();

        assert_eq!(assessment.eligibility.state, EligibilityState::Eligible);
        assert_eq!(assessment.consent, ConsentStatus::Missing);
        assert_eq!(assessment.label.consent_action, Some(ConsentAction::Sign));
        assert!(!assessment.can_schedule());
    }

    #[test]
    fn test_bad_config_propagates() {
        let mut config = ProgramConfig::default();
        config.consent_validity_days = 0;
        let donor = DonorRecord::new(Species::Dog);

        assert!(assess(&donor, None, date(2024, 1, 1), &config).is_err());
    }
}
