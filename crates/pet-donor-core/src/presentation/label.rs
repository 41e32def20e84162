//! Eligibility × consent decision table.

use serde::{Deserialize, Serialize};

use crate::models::{ConsentStatus, EligibilityState, EligibilityStatus};

/// Badge variants understood by the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeVariant {
    Eligible,
    Pending,
    Ineligible,
    TemporaryIneligible,
    ReVerificationRequired,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 5] = [
        BadgeVariant::Eligible,
        BadgeVariant::Pending,
        BadgeVariant::Ineligible,
        BadgeVariant::TemporaryIneligible,
        BadgeVariant::ReVerificationRequired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Eligible => "eligible",
            BadgeVariant::Pending => "pending",
            BadgeVariant::Ineligible => "ineligible",
            BadgeVariant::TemporaryIneligible => "temporaryIneligible",
            BadgeVariant::ReVerificationRequired => "reVerificationRequired",
        }
    }

    /// Parse a display vocabulary name.
    pub fn from_name(name: &str) -> Option<Self> {
        BadgeVariant::ALL.into_iter().find(|v| v.as_str() == name)
    }
}

/// What the owner must do before consent is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConsentAction {
    /// No consent on file
    Sign,
    /// Consent expired or signed on an old form
    ReSign,
}

impl ConsentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentAction::Sign => "sign",
            ConsentAction::ReSign => "reSign",
        }
    }
}

/// Combined label shown on a donor's status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayLabel {
    pub variant: BadgeVariant,
    pub consent_action: Option<ConsentAction>,
}

impl DisplayLabel {
    const fn pass(variant: BadgeVariant) -> Self {
        Self {
            variant,
            consent_action: None,
        }
    }

    const fn blocked(action: ConsentAction) -> Self {
        Self {
            variant: BadgeVariant::Pending,
            consent_action: Some(action),
        }
    }

    /// True only when an appointment may be booked.
    pub fn allows_scheduling(&self) -> bool {
        self.variant == BadgeVariant::Eligible && self.consent_action.is_none()
    }
}

use BadgeVariant as B;
use ConsentAction as A;

/// Rows follow `EligibilityState::ALL`, columns follow `ConsentStatus::ALL`
/// (valid, expired, outdatedVersion, missing).
const DECISION_TABLE: [[DisplayLabel; 4]; 5] = [
    // eligible
    [
        DisplayLabel::pass(B::Eligible),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::Sign),
    ],
    // pending
    [
        DisplayLabel::pass(B::Pending),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::Sign),
    ],
    // ineligible
    [
        DisplayLabel::pass(B::Ineligible),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::Sign),
    ],
    // temporaryIneligible
    [
        DisplayLabel::pass(B::TemporaryIneligible),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::Sign),
    ],
    // reVerificationRequired
    [
        DisplayLabel::pass(B::ReVerificationRequired),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::ReSign),
        DisplayLabel::blocked(A::Sign),
    ],
];

fn row(state: EligibilityState) -> usize {
    match state {
        EligibilityState::Eligible => 0,
        EligibilityState::Pending => 1,
        EligibilityState::Ineligible => 2,
        EligibilityState::TemporaryIneligible => 3,
        EligibilityState::ReVerificationRequired => 4,
    }
}

fn column(consent: ConsentStatus) -> usize {
    match consent {
        ConsentStatus::Valid => 0,
        ConsentStatus::Expired => 1,
        ConsentStatus::OutdatedVersion => 2,
        ConsentStatus::Missing => 3,
    }
}

/// Combine an eligibility state and a consent status into a display label.
///
/// Consent blocks scheduling on its own: unless consent is valid the label is
/// `pending` with a signing action, whatever the eligibility.
pub fn present_state(state: EligibilityState, consent: ConsentStatus) -> DisplayLabel {
    DECISION_TABLE[row(state)][column(consent)]
}

/// Combine engine outputs into a display label.
pub fn present(eligibility: &EligibilityStatus, consent: ConsentStatus) -> DisplayLabel {
    present_state(eligibility.state, consent)
}
