// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Terminal rendering for the `list` and `show` commands.
//!
//! Pure string builders; the command layer decides where the text goes.

use brewlog_store_db::BrewRow;
use serde_json::Value;

/// Format a stored float: whole values keep one decimal place (`18` reads
/// as `18.0`), everything else prints in its shortest form.
pub fn format_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Render the brew table.
///
/// ID, Date, Type, Dose and Water are always shown. Method and Overall
/// Rating appear only when at least one listed row has a value; the rating
/// column uses the legacy-blob fallback for both visibility and cells.
pub fn list_table(rows: &[BrewRow]) -> String {
    let show_method = rows.iter().any(|r| r.method.is_some());
    let show_rating = rows.iter().any(|r| r.overall_rating().is_some());

    let mut header = vec![
        format!("{:>4}", "ID"),
        format!("{:<20}", "Date"),
        format!("{:<10}", "Type"),
    ];
    let mut sep = vec!["-".repeat(4), "-".repeat(20), "-".repeat(10)];

    if show_method {
        header.push(format!("{:<15}", "Method"));
        sep.push("-".repeat(15));
    }

    header.push(format!("{:>9}", "Dose (g)"));
    sep.push("-".repeat(9));
    header.push(format!("{:>10}", "Water (g)"));
    sep.push("-".repeat(10));

    if show_rating {
        header.push(format!("{:>14}", "Overall Rating"));
        sep.push("-".repeat(14));
    }

    let mut out = String::new();
    out.push_str(&header.join("  "));
    out.push('\n');
    out.push_str(&sep.join("  "));
    out.push('\n');

    for row in rows {
        let mut parts = vec![
            format!("{:>4}", row.id),
            format!("{:<20}", row.date),
            format!("{:<10}", row.brew_type),
        ];

        if show_method {
            parts.push(format!("{:<15}", row.method.as_deref().unwrap_or("-")));
        }

        parts.push(format!("{:>9.1}", row.dose_g));
        parts.push(format!("{:>10.1}", row.water_weight_g));

        if show_rating {
            let rating = match row.overall_rating() {
                Some(value) => value.to_string(),
                None => "-".to_string(),
            };
            parts.push(format!("{rating:>14}"));
        }

        out.push_str(&parts.join("  "));
        out.push('\n');
    }
    out
}

fn push_field(out: &mut String, label: &str, value: impl AsRef<str>) {
    out.push_str(&format!("  {:<20}{}\n", label, value.as_ref()));
}

fn push_unit_field(out: &mut String, label: &str, value: impl AsRef<str>, unit: &str) {
    out.push_str(&format!("  {:<20}{} {}\n", label, value.as_ref(), unit));
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render every stored field of one brew.
///
/// Absent fields and empty sections are omitted. The ratings sub-section
/// prefers the per-dimension columns; when all eight are null but the
/// legacy blob is present, the blob's dimensions are shown instead.
pub fn show_brew(row: &BrewRow) -> String {
    let mut out = String::new();
    let title = format!("Brew #{}", row.id);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len() + 1));
    out.push('\n');

    push_field(&mut out, "Date:", &row.date);
    push_field(&mut out, "Type:", &row.brew_type);
    if let Some(method) = &row.method {
        push_field(&mut out, "Method:", method);
    }
    push_unit_field(&mut out, "Dose:", format_float(row.dose_g), "g");
    push_unit_field(&mut out, "Water weight:", format_float(row.water_weight_g), "g");
    if let Some(temp) = row.water_temp_c {
        push_unit_field(&mut out, "Water temp:", format_float(temp), "C");
    }
    if let Some(grind) = &row.grind {
        push_field(&mut out, "Grind:", grind);
    }
    if let Some(duration) = row.duration_s {
        push_unit_field(&mut out, "Duration:", duration.to_string(), "s");
    }
    if let Some(volume) = row.water_volume_ml {
        push_unit_field(&mut out, "Water volume:", format_float(volume), "ml");
    }
    if let Some(notes) = &row.notes {
        push_field(&mut out, "Notes:", notes);
    }

    render_results(&mut out, row);

    let has_coffee = row.coffee_roast_date.is_some()
        || row.coffee_type.is_some()
        || row.coffee_origin.is_some()
        || row.coffee_varietal.is_some()
        || row.coffee_process.is_some();
    if has_coffee {
        out.push_str("\nCoffee\n------\n");
        if let Some(roast_date) = &row.coffee_roast_date {
            push_field(&mut out, "Roast date:", roast_date);
        }
        if let Some(coffee_type) = &row.coffee_type {
            push_field(&mut out, "Type:", coffee_type);
        }
        if let Some(origin) = &row.coffee_origin {
            push_field(&mut out, "Origin:", origin_display(origin));
        }
        if let Some(varietal) = &row.coffee_varietal {
            push_field(&mut out, "Varietal:", varietal);
        }
        if let Some(process) = &row.coffee_process {
            push_field(&mut out, "Process:", process);
        }
    }

    if let Some(ppm) = row.water_ppm {
        out.push_str("\nWater\n-----\n");
        push_field(&mut out, "PPM:", format_float(ppm));
    }

    if row.equipment_grinder.is_some() || row.equipment_brewer.is_some() {
        out.push_str("\nEquipment\n---------\n");
        if let Some(grinder) = &row.equipment_grinder {
            push_field(&mut out, "Grinder:", grinder);
        }
        if let Some(brewer) = &row.equipment_brewer {
            push_field(&mut out, "Brewer:", brewer);
        }
    }

    out
}

fn render_results(out: &mut String, row: &BrewRow) {
    let has_dimension = row.rating_dimensions().iter().any(|(_, v)| v.is_some());
    let has_results = row.result_tds.is_some()
        || row.result_ey.is_some()
        || row.result_brix.is_some()
        || row.result_tasting_notes.is_some()
        || has_dimension
        || row.result_ratings.is_some();
    if !has_results {
        return;
    }

    out.push_str("\nResults\n-------\n");
    if let Some(tds) = row.result_tds {
        push_field(out, "TDS (%):", format_float(tds));
    }
    if let Some(ey) = row.result_ey {
        push_field(out, "EY (%):", format_float(ey));
    }
    if let Some(brix) = row.result_brix {
        push_field(out, "Brix:", format_float(brix));
    }
    if let Some(notes) = &row.result_tasting_notes {
        push_field(out, "Tasting Notes:", notes);
    }

    if has_dimension {
        out.push_str("  Ratings:\n");
        for (name, value) in row.rating_dimensions() {
            if let Some(value) = value {
                out.push_str(&format!("    {:<14}{}\n", capitalize(name), value));
            }
        }
    } else if let Some(blob) = &row.result_ratings
        && let Ok(Value::Object(legacy)) = serde_json::from_str::<Value>(blob)
        && !legacy.is_empty()
    {
        out.push_str("  Ratings:\n");
        for (dim, value) in &legacy {
            let display = match value.as_i64() {
                Some(n) => n.to_string(),
                None => value.to_string(),
            };
            out.push_str(&format!("    {:<14}{}\n", capitalize(dim), display));
        }
    }
}

fn origin_display(raw: &str) -> String {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(origins) => origins.join(", "),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> BrewRow {
        BrewRow {
            id: 3,
            date: "2026-02-19T08:30:00Z".into(),
            brew_type: "pour_over".into(),
            dose_g: 18.0,
            water_weight_g: 280.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_float_keeps_one_decimal_for_whole_values() {
        assert_eq!(format_float(18.0), "18.0");
        assert_eq!(format_float(14.2), "14.2");
        assert_eq!(format_float(14.25), "14.25");
    }

    #[test]
    fn test_list_hides_empty_optional_columns() {
        let table = list_table(&[sample_row()]);
        assert!(table.contains("ID"));
        assert!(table.contains("Dose (g)"));
        assert!(!table.contains("Method"));
        assert!(!table.contains("Overall Rating"));
    }

    #[test]
    fn test_list_shows_columns_when_any_row_has_data() {
        let mut with_method = sample_row();
        with_method.method = Some("V60".into());
        let table = list_table(&[with_method, sample_row()]);
        assert!(table.contains("Method"));
        // The row without a method renders a placeholder cell.
        let bare_row = table.lines().nth(3).unwrap();
        assert!(bare_row.contains("pour_over   -"));
    }

    #[test]
    fn test_list_rating_uses_legacy_fallback() {
        let mut row = sample_row();
        row.result_ratings = Some(r#"{"overall": 4}"#.into());
        let table = list_table(&[row]);
        assert!(table.contains("Overall Rating"));
        assert!(table.contains("4"));
    }

    #[test]
    fn test_show_omits_empty_sections() {
        let text = show_brew(&sample_row());
        assert!(text.starts_with("Brew #3\n--------\n"));
        assert!(text.contains("Dose:"));
        assert!(!text.contains("Results"));
        assert!(!text.contains("Coffee"));
        assert!(!text.contains("Equipment"));
    }

    #[test]
    fn test_show_prefers_dimension_columns_over_blob() {
        let mut row = sample_row();
        row.result_rating_overall = Some(5);
        row.result_ratings = Some(r#"{"overall": 2, "acidity": 1}"#.into());
        let text = show_brew(&row);
        assert!(text.contains("Overall       5"));
        assert!(!text.contains("Acidity"));
    }

    #[test]
    fn test_show_falls_back_to_legacy_blob() {
        let mut row = sample_row();
        row.result_ratings = Some(r#"{"overall": 3, "acidity": 4}"#.into());
        let text = show_brew(&row);
        assert!(text.contains("Ratings:"));
        assert!(text.contains("Overall       3"));
        assert!(text.contains("Acidity       4"));
    }

    #[test]
    fn test_show_joins_origin_list() {
        let mut row = sample_row();
        row.coffee_origin = Some(r#"["Ethiopia", "Colombia"]"#.into());
        let text = show_brew(&row);
        assert!(text.contains("Origin:             Ethiopia, Colombia"));
    }
}
