//! Consent validity checker.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::eligibility::EligibilityResult;
use crate::models::{ConsentRecord, ConsentStatus};

/// Check whether a consent record is usable at `now`.
///
/// An outdated form is never valid, even inside its window, because its legal
/// content may differ. The window end is inclusive.
pub fn check(
    consent: Option<&ConsentRecord>,
    now: DateTime<Utc>,
    required_version: &str,
    validity_period_days: i64,
) -> EligibilityResult<ConsentStatus> {
    let window = validity_window(validity_period_days)?;

    let status = match consent {
        None => ConsentStatus::Missing,
        Some(record) if record.form_version != required_version => ConsentStatus::OutdatedVersion,
        Some(record) if expires_before(record, window, now) => ConsentStatus::Expired,
        Some(_) => ConsentStatus::Valid,
    };

    tracing::debug!(
        consent_id = consent.map(|c| c.consent_id.as_str()),
        required_version,
        status = status.as_str(),
        "checked consent validity"
    );

    Ok(status)
}

fn validity_window(days: i64) -> Result<Duration, ConfigError> {
    if days <= 0 {
        return Err(ConfigError::NonPositiveValidityPeriod(days));
    }
    Duration::try_days(days).ok_or(ConfigError::ValidityPeriodOutOfRange(days))
}

// A window ending past the representable calendar never expires.
fn expires_before(record: &ConsentRecord, window: Duration, now: DateTime<Utc>) -> bool {
    record
        .signed_at
        .checked_add_signed(window)
        .is_some_and(|end| now > end)
}

/// Required consent form version and validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentPolicy {
    pub required_version: String,
    pub validity_period_days: i64,
}

impl ConsentPolicy {
    pub fn new(required_version: impl Into<String>, validity_period_days: i64) -> Self {
        Self {
            required_version: required_version.into(),
            validity_period_days,
        }
    }

    /// Check a consent record under this policy.
    pub fn check(
        &self,
        consent: Option<&ConsentRecord>,
        now: DateTime<Utc>,
    ) -> EligibilityResult<ConsentStatus> {
        check(
            consent,
            now,
            &self.required_version,
            self.validity_period_days,
        )
    }

    /// Last instant at which the record is still valid.
    ///
    /// `None` when the window ends past the representable calendar.
    pub fn expires_at(&self, consent: &ConsentRecord) -> EligibilityResult<Option<DateTime<Utc>>> {
        let window = validity_window(self.validity_period_days)?;
        Ok(consent.signed_at.checked_add_signed(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::EligibilityError;
    use chrono::TimeZone;

    fn signed(version: &str) -> ConsentRecord {
        ConsentRecord::new(
            version,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            "sig-1",
        )
    }

    #[test]
    fn test_missing_consent() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(check(None, now, "1.0", 365).unwrap(), ConsentStatus::Missing);
    }

    #[test]
    fn test_window_end_is_inclusive() {
        let consent = signed("1.0");
        let end = consent.signed_at + Duration::days(365);

        assert_eq!(
            check(Some(&consent), end, "1.0", 365).unwrap(),
            ConsentStatus::Valid
        );
        assert_eq!(
            check(Some(&consent), end + Duration::days(1), "1.0", 365).unwrap(),
            ConsentStatus::Expired
        );
    }

    #[test]
    fn test_outdated_version_even_when_fresh() {
        let consent = signed("0.9");
        assert_eq!(
            check(Some(&consent), consent.signed_at, "1.0", 365).unwrap(),
            ConsentStatus::OutdatedVersion
        );
    }

    #[test]
    fn test_outdated_version_takes_precedence_over_expiry() {
        let consent = signed("0.9");
        let later = consent.signed_at + Duration::days(1000);
        assert_eq!(
            check(Some(&consent), later, "1.0", 365).unwrap(),
            ConsentStatus::OutdatedVersion
        );
    }

    #[test]
    fn test_non_positive_window_is_config_error() {
        let consent = signed("1.0");
        for days in [0, -5] {
            let err = check(Some(&consent), consent.signed_at, "1.0", days).unwrap_err();
            assert!(matches!(
                err,
                EligibilityError::InvalidConfiguration(ConfigError::NonPositiveValidityPeriod(d)) if d == days
            ));
        }
        // Missing consent does not hide a bad window.
        assert!(check(None, consent.signed_at, "1.0", 0).is_err());
    }

    #[test]
    fn test_policy_expires_at() {
        let policy = ConsentPolicy::new("1.0", 30);
        let consent = signed("1.0");
        let expires_at = policy.expires_at(&consent).unwrap().unwrap();
        assert_eq!(expires_at, Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap());
        assert!(policy.check(Some(&consent), expires_at).unwrap().is_valid());
    }
}
