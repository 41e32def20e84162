//! Status presentation: display labels and the badge palette.
//!
//! The decision engine knows nothing about colors or icons. This module owns
//! the one mapping from engine output to what the status badge renders.

mod label;
mod palette;

pub use label::*;
pub use palette::*;
