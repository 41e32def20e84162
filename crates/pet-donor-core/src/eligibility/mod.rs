//! Donor eligibility rules.
//!
//! Rules apply in strict precedence; the first match wins:
//!
//! 1. Re-verification flag → `reVerificationRequired`
//! 2. Hold in the future → `temporaryIneligible` until the hold ends
//! 3. Never donated → `eligible`
//! 4. Interval elapsed (inclusive) → `eligible`, otherwise `ineligible`

mod engine;

pub use engine::*;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while evaluating eligibility or consent.
///
/// Configuration is the only failure mode. It is never defaulted: a wrong
/// default could permit or block a medical donation.
#[derive(Error, Debug)]
pub enum EligibilityError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

pub type EligibilityResult<T> = Result<T, EligibilityError>;
