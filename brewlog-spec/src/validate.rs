// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! BrewSpec 0.4 document schema validation.
//!
//! [`validate_document`] walks a parsed document and reports every
//! violation as one message, prefixed with the structural path. The walk
//! visits brews in list order and fields in schema order, so output is
//! deterministic. It never errors and never stops early.
//!
//! The version gate ([`check_document_version`]) is separate and runs first:
//! a document with a foreign version tag is rejected outright instead of
//! being dripped through field-level messages.

use brewlog_model::{
    BrewType, CoffeeType, Grind, LONG_TEXT_MAX, RATING_DIMENSIONS, SHORT_TEXT_MAX, SpecVersion,
    is_date, is_datetime,
};
use serde_json::{Map, Value};

use crate::error::SpecError;

/// Reject any document whose version tag is not the current one.
///
/// Runs before schema validation; the rest of the document is not looked at.
pub fn check_document_version(doc: &Value) -> Result<(), SpecError> {
    let found = doc
        .get("brewspec_version")
        .and_then(Value::as_str)
        .unwrap_or("missing");
    if found == SpecVersion::CURRENT.as_str() {
        Ok(())
    } else {
        Err(SpecError::UnsupportedVersion {
            found: found.to_string(),
        })
    }
}

/// Validate a parsed BrewSpec document against the 0.4 schema.
///
/// Returns one message per violation; an empty list means valid.
pub fn validate_document(doc: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    match doc.get("brewspec_version") {
        Some(Value::String(tag)) if tag == SpecVersion::CURRENT.as_str() => {}
        _ => errors.push(format!(
            "brewspec_version: must be the string \"{}\"",
            SpecVersion::CURRENT.as_str()
        )),
    }

    match doc.get("brews") {
        Some(Value::Array(brews)) if !brews.is_empty() => {
            for (i, brew) in brews.iter().enumerate() {
                validate_brew(i, brew, &mut errors);
            }
        }
        _ => errors.push("brews: must be a non-empty list".to_string()),
    }

    for key in top_level_keys(doc) {
        if !["brewspec_version", "brews"].contains(&key.as_str()) {
            errors.push(format!("unexpected key '{key}'"));
        }
    }

    errors
}

fn top_level_keys(doc: &Value) -> Vec<String> {
    doc.as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

const BREW_KEYS: [&str; 14] = [
    "date",
    "type",
    "method",
    "dose_g",
    "water_weight_g",
    "water_volume_ml",
    "water_temp_c",
    "grind",
    "duration_s",
    "notes",
    "coffee",
    "water",
    "equipment",
    "result",
];

const REQUIRED_KEYS: [&str; 4] = ["date", "type", "dose_g", "water_weight_g"];

fn validate_brew(i: usize, brew: &Value, errors: &mut Vec<String>) {
    let Some(map) = brew.as_object() else {
        errors.push(format!("brews[{i}]: must be a map"));
        return;
    };

    for key in REQUIRED_KEYS {
        if !map.contains_key(key) {
            errors.push(format!("brews[{i}]: missing required key '{key}'"));
        }
    }
    for key in map.keys() {
        if !BREW_KEYS.contains(&key.as_str()) {
            errors.push(format!("brews[{i}]: unexpected key '{key}'"));
        }
    }

    if let Some(date) = map.get("date")
        && !date.as_str().is_some_and(|s| is_datetime(s) || is_date(s))
    {
        errors.push(format!(
            "brews[{i}].date: must match YYYY-MM-DDTHH:MM:SSZ or YYYY-MM-DD"
        ));
    }
    if let Some(brew_type) = map.get("type")
        && !brew_type
            .as_str()
            .is_some_and(|s| s.parse::<BrewType>().is_ok())
    {
        errors.push(format!(
            "brews[{i}].type: must be one of: {}",
            BrewType::allowed()
        ));
    }
    check_positive_number(map, "dose_g", &format!("brews[{i}].dose_g"), errors);
    check_positive_number(
        map,
        "water_weight_g",
        &format!("brews[{i}].water_weight_g"),
        errors,
    );
    check_short_text(map, "method", &format!("brews[{i}].method"), errors);
    check_positive_number(
        map,
        "water_volume_ml",
        &format!("brews[{i}].water_volume_ml"),
        errors,
    );
    if let Some(temp) = map.get("water_temp_c")
        && !temp.as_f64().is_some_and(|t| (0.0..=100.0).contains(&t))
    {
        errors.push(format!(
            "brews[{i}].water_temp_c: must be a number between 0 and 100"
        ));
    }
    if let Some(grind) = map.get("grind")
        && !grind.as_str().is_some_and(Grind::is_member)
    {
        errors.push(format!(
            "brews[{i}].grind: must be one of: {}",
            Grind::allowed()
        ));
    }
    if let Some(duration) = map.get("duration_s")
        && !duration.as_i64().is_some_and(|d| d > 0)
    {
        errors.push(format!(
            "brews[{i}].duration_s: must be an integer greater than 0"
        ));
    }
    check_long_text(map, "notes", &format!("brews[{i}].notes"), errors);

    if let Some(coffee) = map.get("coffee") {
        validate_coffee(i, coffee, errors);
    }
    if let Some(water) = map.get("water") {
        validate_water(i, water, errors);
    }
    if let Some(equipment) = map.get("equipment") {
        validate_equipment(i, equipment, errors);
    }
    if let Some(result) = map.get("result") {
        validate_result(i, result, errors);
    }
}

fn validate_coffee(i: usize, coffee: &Value, errors: &mut Vec<String>) {
    let Some(map) = coffee.as_object() else {
        errors.push(format!("brews[{i}].coffee: must be a map"));
        return;
    };
    for key in map.keys() {
        if !["roast_date", "type", "origin", "varietal", "process"].contains(&key.as_str()) {
            errors.push(format!("brews[{i}].coffee: unexpected key '{key}'"));
        }
    }
    if let Some(roast_date) = map.get("roast_date")
        && !roast_date.as_str().is_some_and(is_date)
    {
        errors.push(format!("brews[{i}].coffee.roast_date: must match YYYY-MM-DD"));
    }
    if let Some(coffee_type) = map.get("type")
        && !coffee_type
            .as_str()
            .is_some_and(|s| s.parse::<CoffeeType>().is_ok())
    {
        errors.push(format!(
            "brews[{i}].coffee.type: must be one of: {}",
            CoffeeType::allowed()
        ));
    }
    if let Some(origin) = map.get("origin") {
        match origin.as_array() {
            Some(entries) if !entries.is_empty() => {
                let all_valid = entries.iter().all(|e| {
                    e.as_str()
                        .is_some_and(|s| !s.trim().is_empty() && s.chars().count() <= SHORT_TEXT_MAX)
                });
                if !all_valid {
                    errors.push(format!(
                        "brews[{i}].coffee.origin: each entry must be a non-empty string of at most {SHORT_TEXT_MAX} characters"
                    ));
                }
            }
            _ => errors.push(format!(
                "brews[{i}].coffee.origin: must be a non-empty list of strings"
            )),
        }
    }
    check_short_text(map, "varietal", &format!("brews[{i}].coffee.varietal"), errors);
    check_short_text(map, "process", &format!("brews[{i}].coffee.process"), errors);
}

fn validate_water(i: usize, water: &Value, errors: &mut Vec<String>) {
    let Some(map) = water.as_object() else {
        errors.push(format!("brews[{i}].water: must be a map"));
        return;
    };
    for key in map.keys() {
        if key != "ppm" {
            errors.push(format!("brews[{i}].water: unexpected key '{key}'"));
        }
    }
    if let Some(ppm) = map.get("ppm")
        && !ppm.as_f64().is_some_and(|p| p >= 0.0)
    {
        errors.push(format!(
            "brews[{i}].water.ppm: must be a number greater than or equal to 0"
        ));
    }
}

fn validate_equipment(i: usize, equipment: &Value, errors: &mut Vec<String>) {
    let Some(map) = equipment.as_object() else {
        errors.push(format!("brews[{i}].equipment: must be a map"));
        return;
    };
    for key in map.keys() {
        if !["grinder", "brewer"].contains(&key.as_str()) {
            errors.push(format!("brews[{i}].equipment: unexpected key '{key}'"));
        }
    }
    check_short_text(map, "grinder", &format!("brews[{i}].equipment.grinder"), errors);
    check_short_text(map, "brewer", &format!("brews[{i}].equipment.brewer"), errors);
}

fn validate_result(i: usize, result: &Value, errors: &mut Vec<String>) {
    let Some(map) = result.as_object() else {
        errors.push(format!("brews[{i}].result: must be a map"));
        return;
    };
    for key in map.keys() {
        if !["tds", "ey", "brix", "tasting_notes", "ratings"].contains(&key.as_str()) {
            errors.push(format!("brews[{i}].result: unexpected key '{key}'"));
        }
    }
    check_positive_number(map, "tds", &format!("brews[{i}].result.tds"), errors);
    check_positive_number(map, "ey", &format!("brews[{i}].result.ey"), errors);
    if let Some(brix) = map.get("brix")
        && !brix.as_f64().is_some_and(|b| b >= 0.0)
    {
        errors.push(format!(
            "brews[{i}].result.brix: must be a number greater than or equal to 0"
        ));
    }
    check_long_text(
        map,
        "tasting_notes",
        &format!("brews[{i}].result.tasting_notes"),
        errors,
    );
    if let Some(ratings) = map.get("ratings") {
        validate_ratings(i, ratings, errors);
    }
}

fn validate_ratings(i: usize, ratings: &Value, errors: &mut Vec<String>) {
    let Some(map) = ratings.as_object() else {
        errors.push(format!("brews[{i}].result.ratings: must be a map"));
        return;
    };
    for key in map.keys() {
        if !RATING_DIMENSIONS.contains(&key.as_str()) {
            errors.push(format!("brews[{i}].result.ratings: unexpected key '{key}'"));
        }
    }
    for dim in RATING_DIMENSIONS {
        if let Some(value) = map.get(dim)
            && !value.as_i64().is_some_and(|v| (1..=5).contains(&v))
        {
            errors.push(format!(
                "brews[{i}].result.ratings.{dim}: must be an integer between 1 and 5"
            ));
        }
    }
}

fn check_positive_number(map: &Map<String, Value>, key: &str, path: &str, errors: &mut Vec<String>) {
    if let Some(value) = map.get(key)
        && !value.as_f64().is_some_and(|v| v > 0.0)
    {
        errors.push(format!("{path}: must be a number greater than 0"));
    }
}

fn check_short_text(map: &Map<String, Value>, key: &str, path: &str, errors: &mut Vec<String>) {
    check_text(map, key, path, SHORT_TEXT_MAX, errors);
}

fn check_long_text(map: &Map<String, Value>, key: &str, path: &str, errors: &mut Vec<String>) {
    check_text(map, key, path, LONG_TEXT_MAX, errors);
}

fn check_text(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    max: usize,
    errors: &mut Vec<String>,
) {
    if let Some(value) = map.get(key)
        && !value
            .as_str()
            .is_some_and(|s| !s.trim().is_empty() && s.chars().count() <= max)
    {
        errors.push(format!(
            "{path}: must be a non-empty string of at most {max} characters"
        ));
    }
}
