//! Property tests for the eligibility and consent rules.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pet_donor_core::{
    check, evaluate, present, BadgeVariant, ConsentRecord, ConsentStatus, DonationIntervals,
    DonorRecord, EligibilityState, Species,
};
use proptest::prelude::*;

fn species() -> impl Strategy<Value = Species> {
    prop_oneof![Just(Species::Dog), Just(Species::Cat), Just(Species::Horse)]
}

// Seconds between 2000-01-01 and 2040-01-01.
fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..2_208_988_800i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

proptest! {
    #[test]
    fn never_donated_is_eligible(species in species(), now in timestamp()) {
        let donor = DonorRecord::new(species);
        let status = evaluate(&donor, now, &DonationIntervals::default()).unwrap();
        prop_assert_eq!(status.state, EligibilityState::Eligible);
    }

    #[test]
    fn interval_boundary(species in species(), weeks in 1u32..=52, last in timestamp()) {
        let intervals = DonationIntervals::new().with(species, weeks);
        let donor = DonorRecord::new(species).with_last_donation(last);
        let next = last + Duration::weeks(i64::from(weeks));

        let at = evaluate(&donor, next, &intervals).unwrap();
        prop_assert_eq!(at.state, EligibilityState::Eligible);

        let before = evaluate(&donor, next - Duration::days(1), &intervals).unwrap();
        prop_assert_eq!(before.state, EligibilityState::Ineligible);
        prop_assert_eq!(before.next_eligible_date, Some(next));
    }

    #[test]
    fn re_verification_always_wins(
        species in species(),
        now in timestamp(),
        last in proptest::option::of(timestamp()),
        hold in proptest::option::of(timestamp()),
    ) {
        let donor = DonorRecord {
            pet_id: "pet".into(),
            species,
            last_donation_date: last,
            temporary_hold_until: hold,
            re_verification_required: true,
        };
        let status = evaluate(&donor, now, &DonationIntervals::default()).unwrap();
        prop_assert_eq!(status.state, EligibilityState::ReVerificationRequired);
    }

    #[test]
    fn future_hold_reports_exact_date(
        species in species(),
        now in timestamp(),
        ahead_secs in 1i64..=31_536_000,
        last in proptest::option::of(timestamp()),
    ) {
        let hold = now + Duration::seconds(ahead_secs);
        let mut donor = DonorRecord::new(species).with_hold_until(hold);
        donor.last_donation_date = last;

        let status = evaluate(&donor, now, &DonationIntervals::default()).unwrap();
        prop_assert_eq!(status.state, EligibilityState::TemporaryIneligible);
        prop_assert_eq!(status.next_eligible_date, Some(hold));
    }

    #[test]
    fn consent_window_inclusive(signed_at in timestamp(), days in 1i64..=3650) {
        let consent = ConsentRecord::new("1.0", signed_at, "sig");
        let end = signed_at + Duration::days(days);

        prop_assert_eq!(check(Some(&consent), end, "1.0", days).unwrap(), ConsentStatus::Valid);
        prop_assert_eq!(
            check(Some(&consent), end + Duration::days(1), "1.0", days).unwrap(),
            ConsentStatus::Expired
        );
    }

    #[test]
    fn wrong_version_is_outdated(signed_at in timestamp(), offset in 0i64..=400, version in "[0-9]\\.[0-9]") {
        prop_assume!(version != "1.0");
        let consent = ConsentRecord::new(version, signed_at, "sig");
        let now = signed_at + Duration::days(offset);
        prop_assert_eq!(
            check(Some(&consent), now, "1.0", 365).unwrap(),
            ConsentStatus::OutdatedVersion
        );
    }

    #[test]
    fn invalid_consent_never_presents_eligible(species in species(), now in timestamp()) {
        let status = evaluate(&DonorRecord::new(species), now, &DonationIntervals::default()).unwrap();
        for consent in [ConsentStatus::Expired, ConsentStatus::OutdatedVersion, ConsentStatus::Missing] {
            let label = present(&status, consent);
            prop_assert_eq!(label.variant, BadgeVariant::Pending);
            prop_assert!(!label.allows_scheduling());
        }
    }
}
