// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! The versioned brew record and its composite descriptors.
//!
//! A [`BrewRecord`] is only obtainable through [`BrewRecord::from_draft`],
//! which validates every field against the selected format version's rules.
//! Callers fill in a [`BrewDraft`] (all-optional apart from the four required
//! fields) and hand it over; a draft that fails any constraint never becomes
//! a record.

use crate::dates;
use crate::enums::{BrewType, CoffeeType};
use crate::error::ValidationError;
use crate::validate::{
    validate_long_text, validate_non_negative, validate_positive, validate_positive_int,
    validate_rating, validate_short_text, validate_temperature,
};
use crate::version::SpecVersion;

/// Optional coffee ingredient descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coffee {
    pub roast_date: Option<String>,
    pub coffee_type: Option<CoffeeType>,
    pub origin: Option<Vec<String>>,
    pub varietal: Option<String>,
    pub process: Option<String>,
}

impl Coffee {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(roast_date) = &self.roast_date
            && !dates::is_date(roast_date)
        {
            return Err(ValidationError::new(
                "coffee.roast_date",
                "must match YYYY-MM-DD",
            ));
        }
        if let Some(origin) = &self.origin {
            if origin.is_empty() {
                return Err(ValidationError::new(
                    "coffee.origin",
                    "must have at least one entry",
                ));
            }
            for entry in origin {
                if entry.trim().is_empty() {
                    return Err(ValidationError::new(
                        "coffee.origin",
                        "each origin entry must be a non-empty string",
                    ));
                }
                if entry.chars().count() > 100 {
                    return Err(ValidationError::new(
                        "coffee.origin",
                        "each origin entry must not exceed 100 characters",
                    ));
                }
            }
        }
        if let Some(varietal) = &self.varietal {
            validate_short_text("coffee.varietal", varietal)?;
        }
        if let Some(process) = &self.process {
            validate_short_text("coffee.process", process)?;
        }
        Ok(())
    }
}

/// Optional water ingredient descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Water {
    pub ppm: Option<f64>,
}

impl Water {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ppm) = self.ppm {
            validate_non_negative("water.ppm", ppm)?;
        }
        Ok(())
    }
}

/// Optional equipment descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Equipment {
    pub grinder: Option<String>,
    pub brewer: Option<String>,
}

impl Equipment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(grinder) = &self.grinder {
            validate_short_text("equipment.grinder", grinder)?;
        }
        if let Some(brewer) = &self.brewer {
            validate_short_text("equipment.brewer", brewer)?;
        }
        Ok(())
    }
}

/// The eight sensory rating dimensions. Each is an independent integer
/// 1–5; no relationship between dimensions is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ratings {
    pub overall: Option<i64>,
    pub fragrance: Option<i64>,
    pub aroma: Option<i64>,
    pub flavour: Option<i64>,
    pub aftertaste: Option<i64>,
    pub acidity: Option<i64>,
    pub sweetness: Option<i64>,
    pub mouthfeel: Option<i64>,
}

impl Ratings {
    /// Dimension values in canonical order, paired with their names.
    pub fn dimensions(&self) -> [(&'static str, Option<i64>); 8] {
        [
            ("overall", self.overall),
            ("fragrance", self.fragrance),
            ("aroma", self.aroma),
            ("flavour", self.flavour),
            ("aftertaste", self.aftertaste),
            ("acidity", self.acidity),
            ("sweetness", self.sweetness),
            ("mouthfeel", self.mouthfeel),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions().iter().all(|(_, v)| v.is_none())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in self.dimensions() {
            if let Some(value) = value {
                validate_rating(&format!("result.ratings.{name}"), value)?;
            }
        }
        Ok(())
    }
}

/// Optional measured-outcome descriptor (format 0.4).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrewResult {
    pub tds: Option<f64>,
    pub ey: Option<f64>,
    pub brix: Option<f64>,
    pub tasting_notes: Option<String>,
    pub ratings: Option<Ratings>,
}

impl BrewResult {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(tds) = self.tds {
            validate_positive("result.tds", tds)?;
        }
        if let Some(ey) = self.ey {
            validate_positive("result.ey", ey)?;
        }
        if let Some(brix) = self.brix {
            validate_non_negative("result.brix", brix)?;
        }
        if let Some(notes) = &self.tasting_notes {
            validate_long_text("result.tasting_notes", notes)?;
        }
        if let Some(ratings) = &self.ratings {
            ratings.validate()?;
        }
        Ok(())
    }
}

/// Caller-supplied, not-yet-validated brew data.
#[derive(Debug, Clone, Default)]
pub struct BrewDraft {
    pub date: String,
    pub brew_type: String,
    pub dose_g: f64,
    pub water_weight_g: f64,
    pub method: Option<String>,
    pub water_volume_ml: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub grind: Option<String>,
    pub duration_s: Option<i64>,
    pub notes: Option<String>,
    pub coffee: Option<Coffee>,
    pub water: Option<Water>,
    pub equipment: Option<Equipment>,
    pub result: Option<BrewResult>,
}

/// One validated brewing session.
#[derive(Debug, Clone, PartialEq)]
pub struct BrewRecord {
    pub date: String,
    pub brew_type: BrewType,
    pub dose_g: f64,
    pub water_weight_g: f64,
    pub method: Option<String>,
    pub water_volume_ml: Option<f64>,
    pub water_temp_c: Option<f64>,
    /// Validated per the selected version's grind rule: an enum member under
    /// 0.4, bounded free text under earlier formats.
    pub grind: Option<String>,
    pub duration_s: Option<i64>,
    pub notes: Option<String>,
    pub coffee: Option<Coffee>,
    pub water: Option<Water>,
    pub equipment: Option<Equipment>,
    pub result: Option<BrewResult>,
}

impl BrewRecord {
    /// Validate a draft against the current format version.
    pub fn validate(draft: BrewDraft) -> Result<BrewRecord, ValidationError> {
        Self::from_draft(draft, SpecVersion::CURRENT)
    }

    /// Validate a draft against a specific format version's ruleset.
    pub fn from_draft(
        draft: BrewDraft,
        version: SpecVersion,
    ) -> Result<BrewRecord, ValidationError> {
        version.date_rule().validate(&draft.date)?;
        let brew_type: BrewType = draft.brew_type.parse()?;
        validate_positive("dose_g", draft.dose_g)?;
        validate_positive("water_weight_g", draft.water_weight_g)?;

        if let Some(method) = &draft.method {
            validate_short_text("method", method)?;
        }
        if let Some(volume) = draft.water_volume_ml {
            validate_positive("water_volume_ml", volume)?;
        }
        if let Some(temp) = draft.water_temp_c {
            validate_temperature("water_temp_c", temp)?;
        }
        if let Some(grind) = &draft.grind {
            version.grind_rule().validate(grind)?;
        }
        if let Some(duration) = draft.duration_s {
            validate_positive_int("duration_s", duration)?;
        }
        if let Some(notes) = &draft.notes {
            validate_long_text("notes", notes)?;
        }
        if let Some(coffee) = &draft.coffee {
            coffee.validate()?;
        }
        if let Some(water) = &draft.water {
            water.validate()?;
        }
        if let Some(equipment) = &draft.equipment {
            equipment.validate()?;
        }
        if let Some(result) = &draft.result {
            result.validate()?;
        }

        Ok(BrewRecord {
            date: draft.date,
            brew_type,
            dose_g: draft.dose_g,
            water_weight_g: draft.water_weight_g,
            method: draft.method,
            water_volume_ml: draft.water_volume_ml,
            water_temp_c: draft.water_temp_c,
            grind: draft.grind,
            duration_s: draft.duration_s,
            notes: draft.notes,
            coffee: draft.coffee,
            water: draft.water,
            equipment: draft.equipment,
            result: draft.result,
        })
    }
}
