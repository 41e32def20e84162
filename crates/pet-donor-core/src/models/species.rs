//! Donor species.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Jaro-Winkler score a candidate must exceed to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Species accepted into the donor program. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Species {
    Dog,
    Cat,
    Horse,
}

impl Species {
    /// Every species in the program, in display order.
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Horse];

    /// Wire/display code (e.g., "DOG").
    pub fn code(&self) -> &'static str {
        match self {
            Species::Dog => "DOG",
            Species::Cat => "CAT",
            Species::Horse => "HORSE",
        }
    }

    /// Clinical name used in veterinary records (e.g., "canine").
    pub fn clinical_name(&self) -> &'static str {
        match self {
            Species::Dog => "canine",
            Species::Cat => "feline",
            Species::Horse => "equine",
        }
    }

    /// Suggest the closest species code for an unrecognised input.
    pub fn suggest(input: &str) -> Option<Species> {
        let upper = input.trim().to_uppercase();
        let mut best_score = SUGGESTION_THRESHOLD;
        let mut best = None;

        for species in Species::ALL {
            let score = strsim::jaro_winkler(&upper, species.code())
                .max(strsim::jaro_winkler(&upper.to_lowercase(), species.clinical_name()));
            if score > best_score {
                best_score = score;
                best = Some(species);
            }
        }

        best
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Species {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Species::ALL
            .into_iter()
            .find(|species| {
                species.code().eq_ignore_ascii_case(&lower) || species.clinical_name() == lower
            })
            .ok_or_else(|| ConfigError::UnknownSpecies {
                input: s.to_string(),
                suggestion: Species::suggest(s).map(|species| species.code().to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_case_insensitive() {
        assert_eq!("DOG".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("cat".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!(" Horse ".parse::<Species>().unwrap(), Species::Horse);
    }

    #[test]
    fn test_parse_clinical_names() {
        assert_eq!("canine".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!("Feline".parse::<Species>().unwrap(), Species::Cat);
        assert_eq!("equine".parse::<Species>().unwrap(), Species::Horse);
    }

    #[test]
    fn test_unknown_species_suggests_closest() {
        let err = "hrose".parse::<Species>().unwrap_err();
        match err {
            ConfigError::UnknownSpecies { input, suggestion } => {
                assert_eq!(input, "hrose");
                assert_eq!(suggestion, Some("HORSE".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_species_without_suggestion() {
        let err = "parrot".parse::<Species>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownSpecies { suggestion: None, .. }
        ));
    }

    #[test]
    fn test_serde_uses_upper_case_codes() {
        assert_eq!(serde_json::to_string(&Species::Horse).unwrap(), "\"HORSE\"");
        let parsed: Species = serde_json::from_str("\"CAT\"").unwrap();
        assert_eq!(parsed, Species::Cat);
    }
}
