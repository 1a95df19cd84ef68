// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog add`: log a new brew.

use brewlog_model::{
    BrewDraft, BrewRecord, BrewResult, Coffee, CoffeeType, Equipment, Ratings, ValidationError,
    Water,
};
use brewlog_store_db::Store;
use clap::Args;

use crate::error::{CliError, Result};

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Brew date: YYYY-MM-DDTHH:MM:SSZ or YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Brew type: immersion, pour_over, espresso, hybrid
    #[arg(long = "type", value_name = "TYPE")]
    pub brew_type: String,

    /// Coffee dose in grams (> 0)
    #[arg(long)]
    pub dose: f64,

    /// Water weight in grams (> 0)
    #[arg(long)]
    pub water: f64,

    /// Freeform brewer description (e.g. 'Hario V60')
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

    /// Coffee origin (may be repeated: --origin Ethiopia --origin Colombia)
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

    /// Sensory tasting notes; for operational brew-process notes use --notes
    #[arg(long)]
    pub tasting_notes: Option<String>,

    /// Replaced by --rating-overall
    #[arg(long = "rating", hide = true)]
    pub rating_retired: Option<i64>,

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

impl AddArgs {
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

fn build_draft(args: &AddArgs) -> std::result::Result<BrewDraft, ValidationError> {
    let coffee_type = args
        .coffee_type
        .as_deref()
        .map(str::parse::<CoffeeType>)
        .transpose()?;

    let has_coffee = args.roast_date.is_some()
        || coffee_type.is_some()
        || !args.origin.is_empty()
        || args.varietal.is_some()
        || args.process.is_some();
    let coffee = has_coffee.then(|| Coffee {
        roast_date: args.roast_date.clone(),
        coffee_type,
        origin: (!args.origin.is_empty()).then(|| args.origin.clone()),
        varietal: args.varietal.clone(),
        process: args.process.clone(),
    });

    let water = args.water_ppm.map(|ppm| Water { ppm: Some(ppm) });

    let equipment = (args.grinder.is_some() || args.brewer.is_some()).then(|| Equipment {
        grinder: args.grinder.clone(),
        brewer: args.brewer.clone(),
    });

    let ratings = args.ratings();
    let has_result = args.tds.is_some()
        || args.ey.is_some()
        || args.brix.is_some()
        || args.tasting_notes.is_some()
        || !ratings.is_empty();
    let result = has_result.then(|| BrewResult {
        tds: args.tds,
        ey: args.ey,
        brix: args.brix,
        tasting_notes: args.tasting_notes.clone(),
        ratings: (!ratings.is_empty()).then_some(ratings),
    });

    Ok(BrewDraft {
        date: args.date.clone(),
        brew_type: args.brew_type.clone(),
        dose_g: args.dose,
        water_weight_g: args.water,
        method: args.method.clone(),
        water_volume_ml: None,
        water_temp_c: args.temp,
        grind: args.grind.clone(),
        duration_s: args.duration,
        notes: args.notes.clone(),
        coffee,
        water,
        equipment,
        result,
    })
}

pub fn run(store: &Store, args: &AddArgs) -> Result<()> {
    if args.rating_retired.is_some() {
        return Err(CliError::Bare(
            "Error: --rating has been replaced by --rating-overall in BrewLog v0.3.\n\
             Use --rating-overall N to set your overall impression (1-5).\n\
             See --help for all available rating dimension flags."
                .into(),
        ));
    }

    let record = BrewRecord::validate(build_draft(args)?)?;
    let id = store.insert_brew(&record)?;
    println!("Brew #{id} logged.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_args() -> AddArgs {
        AddArgs {
            date: "2026-02-19T08:30:00Z".into(),
            brew_type: "pour_over".into(),
            dose: 18.0,
            water: 280.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_add_inserts_a_row() {
        let store = Store::open_memory().unwrap();
        run(&store, &minimal_args()).unwrap();
        assert_eq!(store.count_brews().unwrap(), 1);
    }

    #[test]
    fn test_sub_objects_built_only_when_flagged() {
        let draft = build_draft(&minimal_args()).unwrap();
        assert!(draft.coffee.is_none());
        assert!(draft.water.is_none());
        assert!(draft.equipment.is_none());
        assert!(draft.result.is_none());

        let args = AddArgs {
            rating_overall: Some(4),
            grinder: Some("Comandante C40".into()),
            ..minimal_args()
        };
        let draft = build_draft(&args).unwrap();
        let result = draft.result.unwrap();
        assert_eq!(result.ratings.unwrap().overall, Some(4));
        assert_eq!(
            draft.equipment.unwrap().grinder.as_deref(),
            Some("Comandante C40")
        );
    }

    #[test]
    fn test_invalid_field_reports_before_insert() {
        let store = Store::open_memory().unwrap();
        let args = AddArgs {
            dose: 0.0,
            ..minimal_args()
        };
        let err = run(&store, &args).unwrap_err();
        assert_eq!(err.user_message(), "Error: dose_g: must be greater than 0");
        assert_eq!(store.count_brews().unwrap(), 0);
    }

    #[test]
    fn test_retired_rating_flag_errors_with_guidance() {
        let store = Store::open_memory().unwrap();
        let args = AddArgs {
            rating_retired: Some(4),
            ..minimal_args()
        };
        let err = run(&store, &args).unwrap_err();
        assert!(
            err.user_message()
                .starts_with("Error: --rating has been replaced by --rating-overall")
        );
        assert_eq!(store.count_brews().unwrap(), 0);
    }
}
