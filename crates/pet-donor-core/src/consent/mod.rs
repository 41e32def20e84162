//! Consent validity and consent history.

mod checker;
mod ledger;

pub use checker::*;
pub use ledger::*;
