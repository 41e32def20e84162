//! Per-species donation intervals.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::models::Species;

/// Minimum wait between donations, in whole weeks, keyed by species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationIntervals(BTreeMap<Species, u32>);

impl Default for DonationIntervals {
    fn default() -> Self {
        Self::new()
            .with(Species::Dog, 8)
            .with(Species::Cat, 10)
            .with(Species::Horse, 12)
    }
}

impl DonationIntervals {
    /// Create an empty table.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the interval for a species, replacing any previous value.
    pub fn with(mut self, species: Species, weeks: u32) -> Self {
        self.0.insert(species, weeks);
        self
    }

    /// Raw configured weeks for a species, if any.
    pub fn weeks(&self, species: Species) -> Option<u32> {
        self.0.get(&species).copied()
    }

    /// Resolve the interval for a species as a duration.
    ///
    /// Missing or zero intervals are configuration errors; neither may be read
    /// as "always eligible" or "never eligible".
    pub fn interval_for(&self, species: Species) -> Result<Duration, ConfigError> {
        match self.weeks(species) {
            None => Err(ConfigError::MissingInterval(species)),
            Some(0) => Err(ConfigError::NonPositiveInterval { species, weeks: 0 }),
            Some(weeks) => Ok(Duration::weeks(i64::from(weeks))),
        }
    }

    /// Check that every species in the program has a usable interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for species in Species::ALL {
            self.interval_for(species)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, u32)> + '_ {
        self.0.iter().map(|(species, weeks)| (*species, *weeks))
    }
}

impl FromIterator<(Species, u32)> for DonationIntervals {
    fn from_iter<T: IntoIterator<Item = (Species, u32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
