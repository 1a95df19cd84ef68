// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Closed enumerations used by the record model and the document schema.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Brew method category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrewType {
    Immersion,
    PourOver,
    Espresso,
    Hybrid,
}

impl BrewType {
    /// All members, in declaration order.
    pub const ALL: [BrewType; 4] = [
        BrewType::Immersion,
        BrewType::PourOver,
        BrewType::Espresso,
        BrewType::Hybrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immersion => "immersion",
            Self::PourOver => "pour_over",
            Self::Espresso => "espresso",
            Self::Hybrid => "hybrid",
        }
    }

    /// Member names, sorted and comma-joined for error messages.
    pub fn allowed() -> String {
        sorted_names(&Self::ALL.map(|v| v.as_str()))
    }
}

impl fmt::Display for BrewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrewType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::new("type", format!("must be one of: {}", Self::allowed()))
            })
    }
}

/// Coffee classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoffeeType {
    SingleOrigin,
    Blend,
}

impl CoffeeType {
    pub const ALL: [CoffeeType; 2] = [CoffeeType::SingleOrigin, CoffeeType::Blend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleOrigin => "single_origin",
            Self::Blend => "blend",
        }
    }

    pub fn allowed() -> String {
        sorted_names(&Self::ALL.map(|v| v.as_str()))
    }
}

impl fmt::Display for CoffeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoffeeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::new("coffee.type", format!("must be one of: {}", Self::allowed()))
            })
    }
}

/// Grind coarseness, fixed since format 0.4. Earlier formats stored
/// freeform text in the same column; values outside this set may
/// therefore still exist in old databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grind {
    Turkish,
    Espresso,
    Fine,
    MediumFine,
    Medium,
    MediumCoarse,
    Coarse,
}

impl Grind {
    pub const ALL: [Grind; 7] = [
        Grind::Turkish,
        Grind::Espresso,
        Grind::Fine,
        Grind::MediumFine,
        Grind::Medium,
        Grind::MediumCoarse,
        Grind::Coarse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Turkish => "turkish",
            Self::Espresso => "espresso",
            Self::Fine => "fine",
            Self::MediumFine => "medium_fine",
            Self::Medium => "medium",
            Self::MediumCoarse => "medium_coarse",
            Self::Coarse => "coarse",
        }
    }

    pub fn allowed() -> String {
        sorted_names(&Self::ALL.map(|v| v.as_str()))
    }

    /// Whether `s` names a member of the current grind enumeration.
    pub fn is_member(s: &str) -> bool {
        Self::ALL.iter().any(|v| v.as_str() == s)
    }
}

impl fmt::Display for Grind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::new("grind", format!("must be one of: {}", Self::allowed()))
            })
    }
}

/// The eight sensory rating dimensions, in display order.
pub const RATING_DIMENSIONS: [&str; 8] = [
    "overall",
    "fragrance",
    "aroma",
    "flavour",
    "aftertaste",
    "acidity",
    "sweetness",
    "mouthfeel",
];

fn sorted_names(names: &[&str]) -> String {
    let mut names: Vec<&str> = names.to_vec();
    names.sort_unstable();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brew_type_roundtrip() {
        for t in BrewType::ALL {
            assert_eq!(t.as_str().parse::<BrewType>().unwrap(), t);
        }
        assert!("drip".parse::<BrewType>().is_err());
    }

    #[test]
    fn test_grind_membership() {
        assert!(Grind::is_member("medium_fine"));
        assert!(!Grind::is_member("medium-fine"));
        assert!(!Grind::is_member("Medium"));
    }

    #[test]
    fn test_allowed_lists_are_sorted() {
        assert_eq!(
            Grind::allowed(),
            "coarse, espresso, fine, medium, medium_coarse, medium_fine, turkish"
        );
        assert_eq!(BrewType::allowed(), "espresso, hybrid, immersion, pour_over");
        assert_eq!(CoffeeType::allowed(), "blend, single_origin");
    }

    #[test]
    fn test_parse_error_names_field() {
        let err = "burr".parse::<Grind>().unwrap_err();
        assert_eq!(err.field, "grind");
        assert!(err.message.contains("medium_coarse"));
    }
}
