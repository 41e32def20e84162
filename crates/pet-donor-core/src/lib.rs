//! Pet Donor Core Library
//!
//! Donor eligibility and consent validity for the pet blood-donation app.
//!
//! # Architecture
//!
//! ```text
//!   DonorRecord ──► Eligibility Rule Engine ──► EligibilityStatus ─┐
//!                                                                  │
//!                                                       ┌──────────▼──────────┐
//!                                                       │  Decision table     │
//!                                                       │  (5 × 4, total)     │
//!                                                       └──────────┬──────────┘
//!                                                                  │
//! ConsentRecord ──► Consent Validity Checker ──► ConsentStatus ────┘
//!                                                                  │
//!                                                                  ▼
//!                                                  DisplayLabel → badge palette
//! ```
//!
//! # Core Principle
//!
//! **Configuration errors are never defaulted.** A missing interval or a bad
//! consent window fails the evaluation instead of guessing at a medical decision.
//!
//! # Modules
//!
//! - [`models`]: Domain types (DonorRecord, ConsentRecord, statuses)
//! - [`config`]: Program configuration snapshot
//! - [`eligibility`]: Eligibility rule engine
//! - [`consent`]: Consent validity checker and consent ledger
//! - [`presentation`]: Display labels and badge palette
//! - [`assessment`]: Combined per-donor assessment
//! - [`notices`]: Loading/error/success notices with injected clock

pub mod assessment;
pub mod config;
pub mod consent;
pub mod eligibility;
pub mod models;
pub mod notices;
pub mod presentation;

// Re-export commonly used types
pub use assessment::{assess, DonorAssessment};
pub use config::{ConfigError, DonationIntervals, ProgramConfig};
pub use consent::{check, ConsentLedger, ConsentPolicy};
pub use eligibility::{evaluate, EligibilityEngine, EligibilityError};
pub use models::{
    ConsentRecord, ConsentStatus, DonorRecord, EligibilityState, EligibilityStatus, Species,
};
pub use presentation::{
    badge_style, present, species_appearance, BadgeVariant, ConsentAction, DisplayLabel,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

use chrono::{DateTime, Utc};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum DonorCoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<EligibilityError> for DonorCoreError {
    fn from(e: EligibilityError) -> Self {
        match e {
            EligibilityError::InvalidConfiguration(inner) => inner.into(),
        }
    }
}

impl From<ConfigError> for DonorCoreError {
    fn from(e: ConfigError) -> Self {
        DonorCoreError::InvalidConfiguration(e.to_string())
    }
}

impl From<serde_json::Error> for DonorCoreError {
    fn from(e: serde_json::Error) -> Self {
        DonorCoreError::SerializationError(e.to_string())
    }
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, DonorCoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DonorCoreError::InvalidInput(format!("{field}: '{value}' is not RFC 3339 ({e})")))
}

fn parse_optional_timestamp(
    field: &str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, DonorCoreError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a core with the built-in program configuration.
#[uniffi::export]
pub fn new_core_with_defaults() -> Arc<DonorCore> {
    Arc::new(DonorCore {
        config: Arc::new(ProgramConfig::default()),
    })
}

/// Create a core from a JSON configuration document.
#[uniffi::export]
pub fn new_core_from_json(json: String) -> Result<Arc<DonorCore>, DonorCoreError> {
    let config = ProgramConfig::from_json(&json)?;
    Ok(Arc::new(DonorCore {
        config: Arc::new(config),
    }))
}

/// Install a log subscriber (e.g., filter "pet_donor_core=debug").
#[uniffi::export]
pub fn init_logging(filter: String) -> Result<(), DonorCoreError> {
    let env_filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .map_err(|e| DonorCoreError::InvalidInput(format!("log filter '{filter}': {e}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| DonorCoreError::InvalidInput(e.to_string()))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Decision engine bound to an immutable configuration snapshot.
#[derive(uniffi::Object)]
pub struct DonorCore {
    config: Arc<ProgramConfig>,
}

#[uniffi::export]
impl DonorCore {
    // =========================================================================
    // Decision Operations
    // =========================================================================

    /// Evaluate donor eligibility at `now` (RFC 3339).
    pub fn evaluate_eligibility(
        &self,
        donor: FfiDonorRecord,
        now: String,
    ) -> Result<FfiEligibilityStatus, DonorCoreError> {
        let donor = DonorRecord::try_from(donor)?;
        let now = parse_timestamp("now", &now)?;
        let status = evaluate(&donor, now, self.config.intervals())?;
        Ok(status.into())
    }

    /// Check consent validity at `now`. Returns the status name (e.g., "valid").
    pub fn check_consent(
        &self,
        consent: Option<FfiConsentRecord>,
        now: String,
    ) -> Result<String, DonorCoreError> {
        let consent = consent.map(ConsentRecord::try_from).transpose()?;
        let now = parse_timestamp("now", &now)?;
        let status = self.config.consent_policy().check(consent.as_ref(), now)?;
        Ok(status.as_str().to_string())
    }

    /// Run eligibility, consent, and presentation together.
    pub fn assess(
        &self,
        donor: FfiDonorRecord,
        consent: Option<FfiConsentRecord>,
        now: String,
    ) -> Result<FfiAssessment, DonorCoreError> {
        let donor = DonorRecord::try_from(donor)?;
        let consent = consent.map(ConsentRecord::try_from).transpose()?;
        let now = parse_timestamp("now", &now)?;
        let assessment = assess(&donor, consent.as_ref(), now, &self.config)?;
        Ok(assessment.into())
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Colors for a badge variant name (e.g., "temporaryIneligible").
    pub fn badge_style(&self, variant: String) -> Result<FfiBadgeStyle, DonorCoreError> {
        let variant = BadgeVariant::from_name(&variant)
            .ok_or_else(|| DonorCoreError::InvalidInput(format!("unknown badge variant '{variant}'")))?;
        Ok(badge_style(variant).into())
    }

    /// Icon and accent color for a species name (e.g., "DOG", "feline").
    pub fn species_appearance(
        &self,
        species: String,
    ) -> Result<FfiSpeciesAppearance, DonorCoreError> {
        let species = species.parse::<Species>()?;
        Ok(species_appearance(species).into())
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Consent form version owners must sign.
    pub fn consent_form_version(&self) -> String {
        self.config.consent_form_version.clone()
    }

    /// Active configuration as JSON.
    pub fn config_json(&self) -> Result<String, DonorCoreError> {
        Ok(self.config.to_json()?)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe donor record. Dates are RFC 3339 strings.
///
/// A date that does not parse is rejected with `InvalidInput`; it is never
/// read as absent, since a missing last donation date evaluates as eligible.
/// A species outside the closed set is `InvalidConfiguration`.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDonorRecord {
    pub pet_id: String,
    pub species: String,
    pub last_donation_date: Option<String>,
    pub temporary_hold_until: Option<String>,
    pub re_verification_required: bool,
}

impl TryFrom<FfiDonorRecord> for DonorRecord {
    type Error = DonorCoreError;

    fn try_from(donor: FfiDonorRecord) -> Result<Self, Self::Error> {
        let species = donor.species.parse::<Species>()?;
        Ok(DonorRecord {
            pet_id: donor.pet_id,
            species,
            last_donation_date: parse_optional_timestamp(
                "last_donation_date",
                donor.last_donation_date.as_deref(),
            )?,
            temporary_hold_until: parse_optional_timestamp(
                "temporary_hold_until",
                donor.temporary_hold_until.as_deref(),
            )?,
            re_verification_required: donor.re_verification_required,
        })
    }
}

/// FFI-safe consent record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiConsentRecord {
    pub consent_id: String,
    pub form_version: String,
    pub signed_at: String,
    pub signature_artifact_ref: String,
}

impl TryFrom<FfiConsentRecord> for ConsentRecord {
    type Error = DonorCoreError;

    fn try_from(consent: FfiConsentRecord) -> Result<Self, Self::Error> {
        Ok(ConsentRecord {
            consent_id: consent.consent_id,
            form_version: consent.form_version,
            signed_at: parse_timestamp("signed_at", &consent.signed_at)?,
            signature_artifact_ref: consent.signature_artifact_ref,
        })
    }
}

/// FFI-safe eligibility status.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEligibilityStatus {
    pub state: String,
    pub next_eligible_date: Option<String>,
}

impl From<EligibilityStatus> for FfiEligibilityStatus {
    fn from(status: EligibilityStatus) -> Self {
        Self {
            state: status.state.as_str().to_string(),
            next_eligible_date: status.next_eligible_date.map(|d| d.to_rfc3339()),
        }
    }
}

/// FFI-safe badge colors.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBadgeStyle {
    pub background: String,
    pub text: String,
}

impl From<presentation::BadgeStyle> for FfiBadgeStyle {
    fn from(style: presentation::BadgeStyle) -> Self {
        Self {
            background: style.background.to_string(),
            text: style.text.to_string(),
        }
    }
}

/// FFI-safe species appearance.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSpeciesAppearance {
    pub icon: String,
    pub accent: String,
}

impl From<presentation::SpeciesAppearance> for FfiSpeciesAppearance {
    fn from(appearance: presentation::SpeciesAppearance) -> Self {
        Self {
            icon: appearance.icon.to_string(),
            accent: appearance.accent.to_string(),
        }
    }
}

/// FFI-safe donor assessment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAssessment {
    pub pet_id: String,
    pub eligibility: FfiEligibilityStatus,
    pub consent_status: String,
    pub badge_variant: String,
    pub consent_action: Option<String>,
    pub badge_style: FfiBadgeStyle,
    pub can_schedule: bool,
}

impl From<DonorAssessment> for FfiAssessment {
    fn from(assessment: DonorAssessment) -> Self {
        Self {
            can_schedule: assessment.can_schedule(),
            pet_id: assessment.pet_id,
            eligibility: assessment.eligibility.into(),
            consent_status: assessment.consent.as_str().to_string(),
            badge_variant: assessment.label.variant.as_str().to_string(),
            consent_action: assessment
                .label
                .consent_action
                .map(|a| a.as_str().to_string()),
            badge_style: badge_style(assessment.label.variant).into(),
        }
    }
}
