//! Domain models for the donor program.

mod consent;
mod donor;
mod species;
mod status;

pub use consent::*;
pub use donor::*;
pub use species::*;
pub use status::*;
