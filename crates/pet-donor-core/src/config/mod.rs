//! Program configuration: donation intervals and consent form policy.
//!
//! The configuration is an immutable snapshot. Callers load it once, validate
//! it, and pass references into evaluations; nothing in the crate mutates it.

mod intervals;

pub use intervals::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consent::ConsentPolicy;
use crate::models::Species;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No donation interval configured for species {0}")]
    MissingInterval(Species),

    #[error("Donation interval for {species} must be positive, got {weeks} weeks")]
    NonPositiveInterval { species: Species, weeks: u32 },

    #[error("Consent validity period must be positive, got {0} days")]
    NonPositiveValidityPeriod(i64),

    #[error("Consent validity period of {0} days is out of range")]
    ValidityPeriodOutOfRange(i64),

    #[error("Consent form version must not be empty")]
    EmptyFormVersion,

    #[error("Unknown species '{input}'{}", suggestion_suffix(.suggestion))]
    UnknownSpecies {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean {s}?"),
        None => String::new(),
    }
}

/// Full program configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Minimum weeks between donations per species
    pub donation_intervals: DonationIntervals,
    /// Consent form version owners must have signed
    pub consent_form_version: String,
    /// How long a signed consent stays usable
    pub consent_validity_days: i64,
    /// How long success/error notices stay visible
    pub notice_auto_clear_ms: u64,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            donation_intervals: DonationIntervals::default(),
            consent_form_version: "1.0".to_string(),
            consent_validity_days: 365,
            notice_auto_clear_ms: 3000,
        }
    }
}

impl ProgramConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Fields missing from the document keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ProgramConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check every value an evaluation depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            tracing::warn!(error = %err, "rejected program configuration");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.donation_intervals.validate()?;
        if self.consent_form_version.trim().is_empty() {
            return Err(ConfigError::EmptyFormVersion);
        }
        if self.consent_validity_days <= 0 {
            return Err(ConfigError::NonPositiveValidityPeriod(
                self.consent_validity_days,
            ));
        }
        if chrono::Duration::try_days(self.consent_validity_days).is_none() {
            return Err(ConfigError::ValidityPeriodOutOfRange(
                self.consent_validity_days,
            ));
        }
        Ok(())
    }

    /// Interval table snapshot.
    pub fn intervals(&self) -> &DonationIntervals {
        &self.donation_intervals
    }

    /// Consent policy snapshot.
    pub fn consent_policy(&self) -> ConsentPolicy {
        ConsentPolicy::new(
            self.consent_form_version.clone(),
            self.consent_validity_days,
        )
    }
}
