// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Bidirectional mapping between stored rows and document brews.
//!
//! Row to document: NULL columns are omitted, sub-objects appear only when
//! at least one of their fields is present, and ratings are read exclusively
//! from the per-dimension columns. The legacy ratings blob is never
//! consulted here. A stored grind outside the 0.4 enumeration is omitted
//! and reported as a [`DroppedGrind`] so the caller can warn.
//!
//! Document to row: a pure structural flatten of an already schema-validated
//! brew map.

use brewlog_model::{Grind, SpecVersion};
use brewlog_store_db::{BrewRow, NewBrewRow};
use serde_json::{Map, Value, json};

use crate::error::{Result, SpecError};

/// A stored grind value that predates the fixed enumeration and was left
/// out of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedGrind {
    pub brew_id: i64,
    pub value: String,
}

/// Convert one stored row to a document brew map.
///
/// The storage `id` is never part of a document.
pub fn row_to_brew(row: &BrewRow) -> Result<(Map<String, Value>, Option<DroppedGrind>)> {
    let mut brew = Map::new();
    brew.insert("date".into(), json!(row.date));
    brew.insert("type".into(), json!(row.brew_type));
    brew.insert("dose_g".into(), json!(row.dose_g));
    brew.insert("water_weight_g".into(), json!(row.water_weight_g));
    insert_str(&mut brew, "method", &row.method);
    insert_f64(&mut brew, "water_volume_ml", row.water_volume_ml);
    insert_f64(&mut brew, "water_temp_c", row.water_temp_c);
    insert_i64(&mut brew, "duration_s", row.duration_s);
    insert_str(&mut brew, "notes", &row.notes);

    let mut dropped = None;
    if let Some(grind) = &row.grind {
        if Grind::is_member(grind) {
            brew.insert("grind".into(), json!(grind));
        } else {
            dropped = Some(DroppedGrind {
                brew_id: row.id,
                value: grind.clone(),
            });
        }
    }

    let mut coffee = Map::new();
    insert_str(&mut coffee, "roast_date", &row.coffee_roast_date);
    insert_str(&mut coffee, "type", &row.coffee_type);
    if let Some(origin_json) = &row.coffee_origin {
        let origin: Vec<String> =
            serde_json::from_str(origin_json).map_err(|e| SpecError::CorruptColumn {
                brew_id: row.id,
                column: "coffee_origin",
                source: e,
            })?;
        coffee.insert("origin".into(), json!(origin));
    }
    insert_str(&mut coffee, "varietal", &row.coffee_varietal);
    insert_str(&mut coffee, "process", &row.coffee_process);
    if !coffee.is_empty() {
        brew.insert("coffee".into(), Value::Object(coffee));
    }

    if let Some(ppm) = row.water_ppm {
        brew.insert("water".into(), json!({"ppm": ppm}));
    }

    let mut equipment = Map::new();
    insert_str(&mut equipment, "grinder", &row.equipment_grinder);
    insert_str(&mut equipment, "brewer", &row.equipment_brewer);
    if !equipment.is_empty() {
        brew.insert("equipment".into(), Value::Object(equipment));
    }

    let mut result = Map::new();
    insert_f64(&mut result, "tds", row.result_tds);
    insert_f64(&mut result, "ey", row.result_ey);
    insert_f64(&mut result, "brix", row.result_brix);
    insert_str(&mut result, "tasting_notes", &row.result_tasting_notes);
    let mut ratings = Map::new();
    for (dim, value) in row.rating_dimensions() {
        insert_i64(&mut ratings, dim, value);
    }
    if !ratings.is_empty() {
        result.insert("ratings".into(), Value::Object(ratings));
    }
    if !result.is_empty() {
        brew.insert("result".into(), Value::Object(result));
    }

    Ok((brew, dropped))
}

/// Convert stored rows to a complete BrewSpec document.
pub fn rows_to_document(rows: &[BrewRow]) -> Result<(Value, Vec<DroppedGrind>)> {
    let mut brews = Vec::with_capacity(rows.len());
    let mut dropped = Vec::new();
    for row in rows {
        let (brew, d) = row_to_brew(row)?;
        brews.push(Value::Object(brew));
        dropped.extend(d);
    }
    let doc = json!({
        "brewspec_version": SpecVersion::CURRENT.as_str(),
        "brews": brews,
    });
    Ok((doc, dropped))
}

/// Flatten a schema-validated document brew into insertable column values.
///
/// Callers must validate first; fields that are absent or of an unexpected
/// shape simply come out as their defaults here.
pub fn brew_to_row(brew: &Map<String, Value>) -> NewBrewRow {
    let coffee = sub_object(brew, "coffee");
    let water = sub_object(brew, "water");
    let equipment = sub_object(brew, "equipment");
    let result = sub_object(brew, "result");
    let ratings = result.and_then(|r| sub_object(r, "ratings"));

    NewBrewRow {
        date: str_field(brew, "date").unwrap_or_default(),
        brew_type: str_field(brew, "type").unwrap_or_default(),
        method: str_field(brew, "method"),
        dose_g: f64_field(brew, "dose_g").unwrap_or_default(),
        water_weight_g: f64_field(brew, "water_weight_g").unwrap_or_default(),
        water_volume_ml: f64_field(brew, "water_volume_ml"),
        water_temp_c: f64_field(brew, "water_temp_c"),
        grind: str_field(brew, "grind"),
        duration_s: i64_field(brew, "duration_s"),
        notes: str_field(brew, "notes"),
        coffee_roast_date: coffee.and_then(|c| str_field(c, "roast_date")),
        coffee_type: coffee.and_then(|c| str_field(c, "type")),
        coffee_origin: coffee
            .and_then(|c| c.get("origin"))
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }),
        coffee_varietal: coffee.and_then(|c| str_field(c, "varietal")),
        coffee_process: coffee.and_then(|c| str_field(c, "process")),
        water_ppm: water.and_then(|w| f64_field(w, "ppm")),
        equipment_grinder: equipment.and_then(|e| str_field(e, "grinder")),
        equipment_brewer: equipment.and_then(|e| str_field(e, "brewer")),
        result_tds: result.and_then(|r| f64_field(r, "tds")),
        result_ey: result.and_then(|r| f64_field(r, "ey")),
        result_brix: result.and_then(|r| f64_field(r, "brix")),
        result_tasting_notes: result.and_then(|r| str_field(r, "tasting_notes")),
        result_rating_overall: ratings.and_then(|r| i64_field(r, "overall")),
        result_rating_fragrance: ratings.and_then(|r| i64_field(r, "fragrance")),
        result_rating_aroma: ratings.and_then(|r| i64_field(r, "aroma")),
        result_rating_flavour: ratings.and_then(|r| i64_field(r, "flavour")),
        result_rating_aftertaste: ratings.and_then(|r| i64_field(r, "aftertaste")),
        result_rating_acidity: ratings.and_then(|r| i64_field(r, "acidity")),
        result_rating_sweetness: ratings.and_then(|r| i64_field(r, "sweetness")),
        result_rating_mouthfeel: ratings.and_then(|r| i64_field(r, "mouthfeel")),
    }
}

fn sub_object<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key).and_then(Value::as_object)
}

fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn f64_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

fn i64_field(map: &Map<String, Value>, key: &str) -> Option<i64> {
    map.get(key).and_then(Value::as_i64)
}

fn insert_str(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), json!(value));
    }
}

fn insert_f64(map: &mut Map<String, Value>, key: &str, value: Option<f64>) {
    if let Some(value) = value {
        map.insert(key.to_string(), json!(value));
    }
}

fn insert_i64(map: &mut Map<String, Value>, key: &str, value: Option<i64>) {
    if let Some(value) = value {
        map.insert(key.to_string(), json!(value));
    }
}
