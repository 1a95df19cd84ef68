// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog update`: set optional fields on an existing brew.
//!
//! Flags mirror the optional set of `add`. Every value passes the record
//! model's constraint checks before any database access; the flag-to-column
//! mapping only ever produces allow-listed column names.

use brewlog_model::{
    BrewResult, Coffee, CoffeeType, Equipment, Ratings, SpecVersion, Water, validate_long_text,
    validate_positive_int, validate_short_text, validate_temperature,
};
use brewlog_store_db::Store;
use clap::Args;
use rusqlite::types::Value;

use crate::error::{CliError, Result};

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Brew ID (defaults to the last brew)
    pub id: Option<i64>,

    /// Brew method (e.g. 'V60')
    #[arg(long)]
    pub method: Option<String>,

    /// Water temperature in Celsius (0-100)
    #[arg(long)]
    pub temp: Option<f64>,

    /// Grind size: turkish | espresso | fine | medium_fine | medium | medium_coarse | coarse
    #[arg(long)]
    pub grind: Option<String>,

    /// Brew duration in seconds (> 0)
    #[arg(long)]
    pub duration: Option<i64>,

    /// Brew process notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Coffee roast date (YYYY-MM-DD)
    #[arg(long)]
    pub roast_date: Option<String>,

    /// Coffee classification: single_origin or blend
    #[arg(long)]
    pub coffee_type: Option<String>,

    /// Coffee origin (may be repeated)
    #[arg(long)]
    pub origin: Vec<String>,

    /// Coffee varietal (freeform)
    #[arg(long)]
    pub varietal: Option<String>,

    /// Coffee processing method (freeform)
    #[arg(long)]
    pub process: Option<String>,

    /// Water mineral content in ppm (>= 0)
    #[arg(long)]
    pub water_ppm: Option<f64>,

    /// Brew TDS percentage (> 0)
    #[arg(long)]
    pub tds: Option<f64>,

    /// Extraction yield percentage (> 0)
    #[arg(long)]
    pub ey: Option<f64>,

    /// Degrees Brix (>= 0)
    #[arg(long)]
    pub brix: Option<f64>,

    /// Sensory tasting notes
    #[arg(long)]
    pub tasting_notes: Option<String>,

    /// Overall impression, 1-5
    #[arg(long)]
    pub rating_overall: Option<i64>,

    /// Fragrance rating, 1-5
    #[arg(long)]
    pub rating_fragrance: Option<i64>,

    /// Aroma rating, 1-5
    #[arg(long)]
    pub rating_aroma: Option<i64>,

    /// Flavour rating, 1-5
    #[arg(long)]
    pub rating_flavour: Option<i64>,

    /// Aftertaste rating, 1-5
    #[arg(long)]
    pub rating_aftertaste: Option<i64>,

    /// Acidity rating, 1-5
    #[arg(long)]
    pub rating_acidity: Option<i64>,

    /// Sweetness rating, 1-5
    #[arg(long)]
    pub rating_sweetness: Option<i64>,

    /// Mouthfeel rating, 1-5
    #[arg(long)]
    pub rating_mouthfeel: Option<i64>,

    /// Grinder name or description
    #[arg(long)]
    pub grinder: Option<String>,

    /// Brewer/dripper name or description
    #[arg(long)]
    pub brewer: Option<String>,
}

impl UpdateArgs {
    fn ratings(&self) -> Ratings {
        Ratings {
            overall: self.rating_overall,
            fragrance: self.rating_fragrance,
            aroma: self.rating_aroma,
            flavour: self.rating_flavour,
            aftertaste: self.rating_aftertaste,
            acidity: self.rating_acidity,
            sweetness: self.rating_sweetness,
            mouthfeel: self.rating_mouthfeel,
        }
    }
}

/// Validate every supplied flag and map it to its column.
pub fn build_updates(args: &UpdateArgs) -> Result<Vec<(String, Value)>> {
    if let Some(method) = &args.method {
        validate_short_text("method", method)?;
    }
    if let Some(temp) = args.temp {
        validate_temperature("water_temp_c", temp)?;
    }
    if let Some(grind) = &args.grind {
        SpecVersion::CURRENT.grind_rule().validate(grind)?;
    }
    if let Some(duration) = args.duration {
        validate_positive_int("duration_s", duration)?;
    }
    if let Some(notes) = &args.notes {
        validate_long_text("notes", notes)?;
    }

    let coffee_type = args
        .coffee_type
        .as_deref()
        .map(str::parse::<CoffeeType>)
        .transpose()?;
    Coffee {
        roast_date: args.roast_date.clone(),
        coffee_type,
        origin: (!args.origin.is_empty()).then(|| args.origin.clone()),
        varietal: args.varietal.clone(),
        process: args.process.clone(),
    }
    .validate()?;
    Water {
        ppm: args.water_ppm,
    }
    .validate()?;
    Equipment {
        grinder: args.grinder.clone(),
        brewer: args.brewer.clone(),
    }
    .validate()?;
    BrewResult {
        tds: args.tds,
        ey: args.ey,
        brix: args.brix,
        tasting_notes: args.tasting_notes.clone(),
        ratings: Some(args.ratings()),
    }
    .validate()?;

    let mut updates: Vec<(String, Value)> = Vec::new();
    let mut text = |column: &str, value: &Option<String>, updates: &mut Vec<(String, Value)>| {
        if let Some(value) = value {
            updates.push((column.to_string(), Value::Text(value.clone())));
        }
    };
    let real = |column: &str, value: Option<f64>, updates: &mut Vec<(String, Value)>| {
        if let Some(value) = value {
            updates.push((column.to_string(), Value::Real(value)));
        }
    };
    let integer = |column: &str, value: Option<i64>, updates: &mut Vec<(String, Value)>| {
        if let Some(value) = value {
            updates.push((column.to_string(), Value::Integer(value)));
        }
    };

    text("method", &args.method, &mut updates);
    real("water_temp_c", args.temp, &mut updates);
    text("grind", &args.grind, &mut updates);
    integer("duration_s", args.duration, &mut updates);
    text("notes", &args.notes, &mut updates);
    text("coffee_roast_date", &args.roast_date, &mut updates);
    text("coffee_type", &args.coffee_type, &mut updates);
    if !args.origin.is_empty() {
        updates.push((
            "coffee_origin".to_string(),
            Value::Text(serde_json::to_string(&args.origin)?),
        ));
    }
    text("coffee_varietal", &args.varietal, &mut updates);
    text("coffee_process", &args.process, &mut updates);
    real("water_ppm", args.water_ppm, &mut updates);
    text("equipment_grinder", &args.grinder, &mut updates);
    text("equipment_brewer", &args.brewer, &mut updates);
    real("result_tds", args.tds, &mut updates);
    real("result_ey", args.ey, &mut updates);
    real("result_brix", args.brix, &mut updates);
    text("result_tasting_notes", &args.tasting_notes, &mut updates);
    for (name, value) in args.ratings().dimensions() {
        integer(&format!("result_rating_{name}"), value, &mut updates);
    }

    Ok(updates)
}

pub fn run(store: &Store, args: &UpdateArgs) -> Result<()> {
    let updates = build_updates(args)?;
    if updates.is_empty() {
        return Err(CliError::usage(
            "no fields to update — provide at least one flag (run --help for options)",
        ));
    }

    let id = match args.id {
        Some(id) => id,
        None => match store.latest_brew_id()? {
            Some(id) => id,
            None => return Err(CliError::usage("no brews logged yet")),
        },
    };

    if !store.update_brew(id, &updates)? {
        return Err(CliError::usage(format!("brew #{id} not found")));
    }

    println!("Brew #{id} updated.");
    Ok(())
}
