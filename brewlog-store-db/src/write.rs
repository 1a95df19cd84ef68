// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Write operations for the journal database.

use brewlog_model::BrewRecord;
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};

use crate::connection::Store;
use crate::error::{Error, Result};
use crate::schema::UPDATABLE_COLUMNS;

/// Column values for one brew insert.
///
/// Covers every insertable column; the legacy `result_ratings` blob is not
/// among them, new rows only ever carry per-dimension rating columns.
#[derive(Debug, Clone, Default)]
pub struct NewBrewRow {
    pub date: String,
    /// The `type` column
    pub brew_type: String,
    pub method: Option<String>,
    pub dose_g: f64,
    pub water_weight_g: f64,
    pub water_volume_ml: Option<f64>,
    pub water_temp_c: Option<f64>,
    pub grind: Option<String>,
    pub duration_s: Option<i64>,
    pub notes: Option<String>,
    pub coffee_roast_date: Option<String>,
    pub coffee_type: Option<String>,
    /// Origin list; JSON-encoded at insert time
    pub coffee_origin: Option<Vec<String>>,
    pub coffee_varietal: Option<String>,
    pub coffee_process: Option<String>,
    pub water_ppm: Option<f64>,
    pub equipment_grinder: Option<String>,
    pub equipment_brewer: Option<String>,
    pub result_tds: Option<f64>,
    pub result_ey: Option<f64>,
    pub result_brix: Option<f64>,
    pub result_tasting_notes: Option<String>,
    pub result_rating_overall: Option<i64>,
    pub result_rating_fragrance: Option<i64>,
    pub result_rating_aroma: Option<i64>,
    pub result_rating_flavour: Option<i64>,
    pub result_rating_aftertaste: Option<i64>,
    pub result_rating_acidity: Option<i64>,
    pub result_rating_sweetness: Option<i64>,
    pub result_rating_mouthfeel: Option<i64>,
}

impl From<&BrewRecord> for NewBrewRow {
    fn from(record: &BrewRecord) -> Self {
        let coffee = record.coffee.as_ref();
        let water = record.water.as_ref();
        let equipment = record.equipment.as_ref();
        let result = record.result.as_ref();
        let ratings = result.and_then(|r| r.ratings);

        Self {
            date: record.date.clone(),
            brew_type: record.brew_type.to_string(),
            method: record.method.clone(),
            dose_g: record.dose_g,
            water_weight_g: record.water_weight_g,
            water_volume_ml: record.water_volume_ml,
            water_temp_c: record.water_temp_c,
            grind: record.grind.clone(),
            duration_s: record.duration_s,
            notes: record.notes.clone(),
            coffee_roast_date: coffee.and_then(|c| c.roast_date.clone()),
            coffee_type: coffee.and_then(|c| c.coffee_type).map(|t| t.to_string()),
            coffee_origin: coffee.and_then(|c| c.origin.clone()),
            coffee_varietal: coffee.and_then(|c| c.varietal.clone()),
            coffee_process: coffee.and_then(|c| c.process.clone()),
            water_ppm: water.and_then(|w| w.ppm),
            equipment_grinder: equipment.and_then(|e| e.grinder.clone()),
            equipment_brewer: equipment.and_then(|e| e.brewer.clone()),
            result_tds: result.and_then(|r| r.tds),
            result_ey: result.and_then(|r| r.ey),
            result_brix: result.and_then(|r| r.brix),
            result_tasting_notes: result.and_then(|r| r.tasting_notes.clone()),
            result_rating_overall: ratings.and_then(|r| r.overall),
            result_rating_fragrance: ratings.and_then(|r| r.fragrance),
            result_rating_aroma: ratings.and_then(|r| r.aroma),
            result_rating_flavour: ratings.and_then(|r| r.flavour),
            result_rating_aftertaste: ratings.and_then(|r| r.aftertaste),
            result_rating_acidity: ratings.and_then(|r| r.acidity),
            result_rating_sweetness: ratings.and_then(|r| r.sweetness),
            result_rating_mouthfeel: ratings.and_then(|r| r.mouthfeel),
        }
    }
}

fn insert_row(conn: &Connection, row: &NewBrewRow) -> Result<i64> {
    let origin_json = row
        .coffee_origin
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        r#"
        INSERT INTO brews (
            date, type, method, dose_g, water_weight_g,
            water_volume_ml, water_temp_c, grind, duration_s, notes,
            coffee_roast_date, coffee_type, coffee_origin,
            coffee_varietal, coffee_process,
            water_ppm,
            equipment_grinder, equipment_brewer,
            result_tds, result_ey, result_brix, result_tasting_notes,
            result_rating_overall, result_rating_fragrance, result_rating_aroma,
            result_rating_flavour, result_rating_aftertaste, result_rating_acidity,
            result_rating_sweetness, result_rating_mouthfeel
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5,
            ?6, ?7, ?8, ?9, ?10,
            ?11, ?12, ?13,
            ?14, ?15,
            ?16,
            ?17, ?18,
            ?19, ?20, ?21, ?22,
            ?23, ?24, ?25,
            ?26, ?27, ?28,
            ?29, ?30
        )
        "#,
        params![
            row.date,
            row.brew_type,
            row.method,
            row.dose_g,
            row.water_weight_g,
            row.water_volume_ml,
            row.water_temp_c,
            row.grind,
            row.duration_s,
            row.notes,
            row.coffee_roast_date,
            row.coffee_type,
            origin_json,
            row.coffee_varietal,
            row.coffee_process,
            row.water_ppm,
            row.equipment_grinder,
            row.equipment_brewer,
            row.result_tds,
            row.result_ey,
            row.result_brix,
            row.result_tasting_notes,
            row.result_rating_overall,
            row.result_rating_fragrance,
            row.result_rating_aroma,
            row.result_rating_flavour,
            row.result_rating_aftertaste,
            row.result_rating_acidity,
            row.result_rating_sweetness,
            row.result_rating_mouthfeel,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

impl Store {
    /// Insert a validated brew record.
    ///
    /// Returns the new row's ID.
    pub fn insert_brew(&self, record: &BrewRecord) -> Result<i64> {
        insert_row(&self.conn, &NewBrewRow::from(record))
    }

    /// Insert a batch of rows inside a single transaction.
    ///
    /// Either every row is inserted or none is; used by document import.
    pub fn insert_brews(&mut self, rows: &[NewBrewRow]) -> Result<Vec<i64>> {
        let tx = self.conn.transaction()?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(insert_row(&tx, row)?);
        }
        tx.commit()?;
        Ok(ids)
    }

    /// SET the given columns on one row.
    ///
    /// Every column name must be in [`UPDATABLE_COLUMNS`]; the first name
    /// outside the list fails the whole call before the database is touched.
    /// Returns whether a row with that ID existed.
    pub fn update_brew(&self, id: i64, updates: &[(String, Value)]) -> Result<bool> {
        for (column, _) in updates {
            if !UPDATABLE_COLUMNS.contains(&column.as_str()) {
                return Err(Error::DisallowedColumn(column.clone()));
            }
        }

        // Column names passed the allow-list check above, so the statement
        // text only ever contains known identifiers.
        let set_clauses = updates
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut values: Vec<Value> = updates.iter().map(|(_, value)| value.clone()).collect();
        values.push(id.into());

        let rows = self.conn.execute(
            &format!("UPDATE brews SET {set_clauses} WHERE id = ?"),
            params_from_iter(values),
        )?;
        Ok(rows > 0)
    }

    /// Delete the brew with the given ID. Returns whether a row was deleted.
    pub fn delete_brew(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM brews WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }
}
