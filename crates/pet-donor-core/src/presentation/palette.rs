//! Badge palette and species appearance tables.

use serde::Serialize;

use super::BadgeVariant;
use crate::models::Species;

/// Background/text color pair for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
}

/// Rows follow `BadgeVariant` declaration order.
const BADGE_PALETTE: [(BadgeVariant, BadgeStyle); 5] = [
    (
        BadgeVariant::Eligible,
        BadgeStyle {
            background: "#DCFCE7",
            text: "#166534",
        },
    ),
    (
        BadgeVariant::Pending,
        BadgeStyle {
            background: "#FEF9C3",
            text: "#854D0E",
        },
    ),
    (
        BadgeVariant::Ineligible,
        BadgeStyle {
            background: "#FEE2E2",
            text: "#991B1B",
        },
    ),
    (
        BadgeVariant::TemporaryIneligible,
        BadgeStyle {
            background: "#FFEDD5",
            text: "#9A3412",
        },
    ),
    (
        BadgeVariant::ReVerificationRequired,
        BadgeStyle {
            background: "#DBEAFE",
            text: "#1E40AF",
        },
    ),
];

/// Colors for a badge variant.
pub fn badge_style(variant: BadgeVariant) -> BadgeStyle {
    BADGE_PALETTE[variant as usize].1
}

/// Icon and accent color for a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeciesAppearance {
    pub icon: &'static str,
    pub accent: &'static str,
}

pub fn species_appearance(species: Species) -> SpeciesAppearance {
    match species {
        Species::Dog => SpeciesAppearance {
            icon: "dog",
            accent: "#B45309",
        },
        Species::Cat => SpeciesAppearance {
            icon: "cat",
            accent: "#7C3AED",
        },
        Species::Horse => SpeciesAppearance {
            icon: "horse",
            accent: "#0F766E",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_rows_follow_variant_order() {
        for (index, variant) in BadgeVariant::ALL.into_iter().enumerate() {
            assert_eq!(BADGE_PALETTE[index].0, variant);
            assert_eq!(badge_style(variant), BADGE_PALETTE[index].1);
        }
    }

    #[test]
    fn test_variants_are_distinguishable() {
        let backgrounds: HashSet<_> = BadgeVariant::ALL
            .into_iter()
            .map(|v| badge_style(v).background)
            .collect();
        assert_eq!(backgrounds.len(), BadgeVariant::ALL.len());
    }

    #[test]
    fn test_species_icons() {
        assert_eq!(species_appearance(Species::Dog).icon, "dog");
        assert_eq!(species_appearance(Species::Horse).icon, "horse");
    }
}
