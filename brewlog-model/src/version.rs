// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! The closed set of interchange-format versions.
//!
//! Each version tag carries the validation ruleset that changed across the
//! format's history: how the record date may be written and what the grind
//! field accepts. The ruleset is selected once, at the entry point; nothing
//! below the record model inspects version tags.

use crate::dates;
use crate::enums::Grind;
use crate::error::ValidationError;
use crate::validate::validate_short_text;

/// A BrewSpec format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    V0_1,
    V0_2,
    V0_3,
    V0_4,
}

/// How a version validates the record timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Full UTC date-time only (formats up to 0.3).
    DatetimeOnly,
    /// Full UTC date-time or a bare calendar date (format 0.4).
    DatetimeOrDate,
}

/// How a version validates the grind field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrindRule {
    /// Non-empty bounded free text (formats up to 0.3).
    FreeformBounded,
    /// Member of the fixed coarseness enumeration (format 0.4).
    Enumerated,
}

impl SpecVersion {
    /// The version this build reads and writes.
    pub const CURRENT: SpecVersion = SpecVersion::V0_4;

    pub const ALL: [SpecVersion; 4] = [
        SpecVersion::V0_1,
        SpecVersion::V0_2,
        SpecVersion::V0_3,
        SpecVersion::V0_4,
    ];

    /// The exact version tag as written in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V0_1 => "0.1",
            Self::V0_2 => "0.2",
            Self::V0_3 => "0.3",
            Self::V0_4 => "0.4",
        }
    }

    /// Classify a document version tag. Returns `None` for tags that never
    /// named a BrewSpec version.
    pub fn from_tag(tag: &str) -> Option<SpecVersion> {
        Self::ALL.iter().find(|v| v.as_str() == tag).copied()
    }

    pub fn date_rule(&self) -> DateRule {
        match self {
            Self::V0_1 | Self::V0_2 | Self::V0_3 => DateRule::DatetimeOnly,
            Self::V0_4 => DateRule::DatetimeOrDate,
        }
    }

    pub fn grind_rule(&self) -> GrindRule {
        match self {
            Self::V0_1 | Self::V0_2 | Self::V0_3 => GrindRule::FreeformBounded,
            Self::V0_4 => GrindRule::Enumerated,
        }
    }
}

impl DateRule {
    /// Validate a record timestamp under this rule.
    ///
    /// The full date-time shape is additionally calendar-checked; the bare
    /// date shape is not (see the `dates` module docs for why).
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            DateRule::DatetimeOnly => {
                if !dates::is_datetime(value) {
                    return Err(ValidationError::new(
                        "date",
                        "must be ISO 8601 UTC format: YYYY-MM-DDTHH:MM:SSZ",
                    ));
                }
                if !dates::is_valid_datetime(value) {
                    return Err(ValidationError::new("date", "is not a valid datetime"));
                }
                Ok(())
            }
            DateRule::DatetimeOrDate => {
                if dates::is_datetime(value) {
                    if !dates::is_valid_datetime(value) {
                        return Err(ValidationError::new("date", "is not a valid datetime"));
                    }
                    Ok(())
                } else if dates::is_date(value) {
                    Ok(())
                } else {
                    Err(ValidationError::new(
                        "date",
                        "must be YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ",
                    ))
                }
            }
        }
    }
}

impl GrindRule {
    /// Validate a grind value under this rule.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            GrindRule::FreeformBounded => validate_short_text("grind", value),
            GrindRule::Enumerated => {
                value.parse::<Grind>()?;
                Ok(())
            }
        }
    }
}
