// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog export`: write every brew to a BrewSpec document or a flat CSV.

use std::fs;
use std::path::{Component, Path, PathBuf};

use brewlog_spec::{DroppedGrind, rows_to_document, validate_document};
use brewlog_store_db::{BrewRow, Store};
use clap::{Args, ValueEnum};

use crate::error::{CliError, IoContext, Result};
use crate::render::format_float;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Yaml,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: ExportFormat,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,
}

/// CSV header, in schema column order. Every stored column is written,
/// including the legacy ratings blob and the JSON-encoded origin cell.
const CSV_COLUMNS: [&str; 32] = [
    "id",
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
    "coffee_roast_date",
    "coffee_type",
    "coffee_origin",
    "coffee_varietal",
    "coffee_process",
    "water_ppm",
    "equipment_grinder",
    "equipment_brewer",
    "result_tds",
    "result_ey",
    "result_brix",
    "result_tasting_notes",
    "result_ratings",
    "result_rating_overall",
    "result_rating_fragrance",
    "result_rating_aroma",
    "result_rating_flavour",
    "result_rating_aftertaste",
    "result_rating_acidity",
    "result_rating_sweetness",
    "result_rating_mouthfeel",
];

fn check_path(path: &Path, format: ExportFormat) -> Result<()> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::usage("path must not contain '..' components."));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let ext_ok = match format {
        ExportFormat::Yaml | ExportFormat::Json => {
            matches!(ext.as_deref(), Some("yaml" | "yml" | "json"))
        }
        ExportFormat::Csv => ext.as_deref() == Some("csv"),
    };
    if !ext_ok {
        let message = match format {
            ExportFormat::Csv => "output path must end with .csv.",
            _ => "output path must end with .yaml, .yml, or .json.",
        };
        return Err(CliError::usage(message));
    }

    // An empty parent means the current directory.
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(CliError::usage(format!(
            "directory '{}' does not exist.",
            parent.display()
        )));
    }

    Ok(())
}

fn document_bytes(rows: &[BrewRow], format: ExportFormat) -> Result<(Vec<u8>, Vec<DroppedGrind>)> {
    let (doc, dropped) = rows_to_document(rows)?;
    let violations = validate_document(&doc);
    if !violations.is_empty() {
        return Err(CliError::InternalConsistency(violations));
    }
    let text = match format {
        ExportFormat::Yaml => serde_yaml::to_string(&doc)?,
        _ => {
            let mut text = serde_json::to_string_pretty(&doc)?;
            text.push('\n');
            text
        }
    };
    Ok((text.into_bytes(), dropped))
}

fn csv_bytes(rows: &[BrewRow]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(CSV_COLUMNS)?;
        for row in rows {
            writer.write_record(csv_record(row))?;
        }
        writer
            .flush()
            .io_context(|| "failed to flush CSV writer".to_string())?;
    }
    Ok(buf)
}

fn cell_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn cell_f64(value: Option<f64>) -> String {
    value.map(format_float).unwrap_or_default()
}

fn cell_i64(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_record(row: &BrewRow) -> [String; 32] {
    [
        row.id.to_string(),
        row.date.clone(),
        row.brew_type.clone(),
        cell_str(&row.method),
        format_float(row.dose_g),
        format_float(row.water_weight_g),
        cell_f64(row.water_volume_ml),
        cell_f64(row.water_temp_c),
        cell_str(&row.grind),
        cell_i64(row.duration_s),
        cell_str(&row.notes),
        cell_str(&row.coffee_roast_date),
        cell_str(&row.coffee_type),
        cell_str(&row.coffee_origin),
        cell_str(&row.coffee_varietal),
        cell_str(&row.coffee_process),
        cell_f64(row.water_ppm),
        cell_str(&row.equipment_grinder),
        cell_str(&row.equipment_brewer),
        cell_f64(row.result_tds),
        cell_f64(row.result_ey),
        cell_f64(row.result_brix),
        cell_str(&row.result_tasting_notes),
        cell_str(&row.result_ratings),
        cell_i64(row.result_rating_overall),
        cell_i64(row.result_rating_fragrance),
        cell_i64(row.result_rating_aroma),
        cell_i64(row.result_rating_flavour),
        cell_i64(row.result_rating_aftertaste),
        cell_i64(row.result_rating_acidity),
        cell_i64(row.result_rating_sweetness),
        cell_i64(row.result_rating_mouthfeel),
    ]
}

pub fn run(
    store: &Store,
    args: &ExportArgs,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<()> {
    check_path(&args.path, args.format)?;

    let rows = store.all_brews()?;
    if rows.is_empty() {
        println!("No brews to export.");
        return Ok(());
    }

    let (bytes, dropped) = match args.format {
        ExportFormat::Yaml | ExportFormat::Json => document_bytes(&rows, args.format)?,
        ExportFormat::Csv => (csv_bytes(&rows)?, Vec::new()),
    };

    if args.path.exists()
        && !args.force
        && !confirm(&format!(
            "File already exists at '{}'. Overwrite? [y/N]",
            args.path.display()
        ))
    {
        println!("Export cancelled.");
        return Ok(());
    }

    fs::write(&args.path, &bytes)
        .io_context(|| format!("failed to write '{}'", args.path.display()))?;

    for drop in &dropped {
        eprintln!(
            "Warning: brew #{} grind '{}' is not a valid 0.4 grind; omitted from export.",
            drop.brew_id, drop.value
        );
    }
    println!("Exported {} brews to '{}'.", rows.len(), args.path.display());
    Ok(())
}
