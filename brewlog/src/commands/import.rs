// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog import`: load a BrewSpec document into the journal.
//!
//! The pipeline is strictly ordered: path checks, size cap, parse, version
//! gate, schema validation, then a single transaction for all inserts.
//! Nothing is written unless every stage passes, and brews are never
//! deduplicated against existing rows.

use std::fs;
use std::path::{Component, Path, PathBuf};

use brewlog_spec::{SpecError, brew_to_row, check_document_version, validate_document};
use brewlog_store_db::Store;
use clap::Args;
use serde_json::Value;

use crate::error::{CliError, IoContext, Result};

/// Files above this size are rejected before any content is read.
const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to a BrewSpec document (.yaml, .yml, or .json)
    pub path: PathBuf,
}

enum ImportFormat {
    Yaml,
    Json,
}

fn detect_format(path: &Path) -> Result<ImportFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => Ok(ImportFormat::Yaml),
        Some("json") => Ok(ImportFormat::Json),
        _ => {
            let shown = ext.map(|e| format!(".{e}")).unwrap_or_default();
            Err(CliError::usage(format!(
                "unrecognised file extension '{shown}'. Supported formats: .yaml, .yml, .json"
            )))
        }
    }
}

pub fn run(store: &mut Store, args: &ImportArgs) -> Result<()> {
    if args
        .path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(CliError::usage("path must not contain '..' components."));
    }

    let metadata = match fs::metadata(&args.path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CliError::usage(format!(
                "file '{}' does not exist.",
                args.path.display()
            )));
        }
        Err(e) => {
            return Err(CliError::io(
                format!("failed to stat '{}'", args.path.display()),
                e,
            ));
        }
    };
    if metadata.len() > MAX_IMPORT_BYTES {
        return Err(CliError::usage(format!(
            "file exceeds 10MB limit ({} bytes). Refusing to parse.",
            metadata.len()
        )));
    }

    let format = detect_format(&args.path)?;
    let content = fs::read_to_string(&args.path)
        .io_context(|| format!("failed to read '{}'", args.path.display()))?;

    let doc: Value = match format {
        ImportFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| CliError::Bare(format!("Error parsing YAML: {e}")))?,
        ImportFormat::Json => serde_json::from_str(&content)
            .map_err(|e| CliError::Bare(format!("Error parsing JSON: {e}")))?,
    };

    if !doc.is_object() {
        return Err(SpecError::NotADocument.into());
    }

    // The version gate runs before schema validation; a foreign document is
    // rejected with upgrade guidance no matter what else it contains.
    check_document_version(&doc)?;

    let violations = validate_document(&doc);
    if !violations.is_empty() {
        return Err(CliError::Validation(violations));
    }

    let rows: Vec<_> = doc["brews"]
        .as_array()
        .map(|brews| {
            brews
                .iter()
                .filter_map(Value::as_object)
                .map(brew_to_row)
                .collect()
        })
        .unwrap_or_default();

    if let Err(e) = store.insert_brews(&rows) {
        log::debug!("bulk insert failed: {e}");
        return Err(CliError::usage("failed to insert brews. No changes written."));
    }

    println!("Imported {} brews.", rows.len());
    Ok(())
}
