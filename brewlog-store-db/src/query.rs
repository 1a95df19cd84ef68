// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Read query operations for the journal database.

use rusqlite::types::Value;
use rusqlite::{Row, params, params_from_iter};

use crate::connection::Store;
use crate::error::Result;
use crate::schema::SELECT_COLUMNS;
use crate::types::{BrewRow, ListFilter};

fn read_row(row: &Row<'_>) -> rusqlite::Result<BrewRow> {
    Ok(BrewRow {
        id: row.get(0)?,
        date: row.get(1)?,
        brew_type: row.get(2)?,
        method: row.get(3)?,
        dose_g: row.get(4)?,
        water_weight_g: row.get(5)?,
        water_volume_ml: row.get(6)?,
        water_temp_c: row.get(7)?,
        grind: row.get(8)?,
        duration_s: row.get(9)?,
        notes: row.get(10)?,
        coffee_roast_date: row.get(11)?,
        coffee_type: row.get(12)?,
        coffee_origin: row.get(13)?,
        coffee_varietal: row.get(14)?,
        coffee_process: row.get(15)?,
        water_ppm: row.get(16)?,
        equipment_grinder: row.get(17)?,
        equipment_brewer: row.get(18)?,
        result_tds: row.get(19)?,
        result_ey: row.get(20)?,
        result_brix: row.get(21)?,
        result_tasting_notes: row.get(22)?,
        result_ratings: row.get(23)?,
        result_rating_overall: row.get(24)?,
        result_rating_fragrance: row.get(25)?,
        result_rating_aroma: row.get(26)?,
        result_rating_flavour: row.get(27)?,
        result_rating_aftertaste: row.get(28)?,
        result_rating_acidity: row.get(29)?,
        result_rating_sweetness: row.get(30)?,
        result_rating_mouthfeel: row.get(31)?,
    })
}

impl Store {
    /// Fetch a single brew by ID.
    ///
    /// Returns `None` if no row has that ID.
    pub fn get_brew(&self, id: i64) -> Result<Option<BrewRow>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT {SELECT_COLUMNS} FROM brews WHERE id = ?1"))?;

        match stmt.query_row(params![id], read_row) {
            Ok(row) => Ok(Some(row)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Return brews matching `filter`, most recent date first.
    ///
    /// Condition strings are static; filter values are always bound
    /// parameters.
    pub fn list_brews(&self, filter: &ListFilter) -> Result<Vec<BrewRow>> {
        let mut conditions: Vec<&'static str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(brew_type) = &filter.brew_type {
            conditions.push("type = ?");
            values.push(brew_type.clone().into());
        }
        if let Some(since) = &filter.since {
            // substr compares at day granularity for both stored date shapes.
            conditions.push("substr(date, 1, 10) >= ?");
            values.push(since.clone().into());
        }
        if let Some(until) = &filter.until {
            conditions.push("substr(date, 1, 10) <= ?");
            values.push(until.clone().into());
        }
        if let Some(rating_min) = filter.rating_min {
            conditions.push("result_rating_overall >= ?");
            values.push(rating_min.into());
        }
        if let Some(rating_max) = filter.rating_max {
            conditions.push("result_rating_overall <= ?");
            values.push(rating_max.into());
        }

        let mut sql = format!("SELECT {SELECT_COLUMNS} FROM brews");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY date DESC");
        if !filter.all_rows {
            sql.push_str(" LIMIT ?");
            values.push(i64::from(filter.limit).into());
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut brews = Vec::new();
        let mut rows = stmt.query(params_from_iter(values))?;
        while let Some(row) = rows.next()? {
            brews.push(read_row(row)?);
        }
        Ok(brews)
    }

    /// Return every brew, most recent date first. Used by export.
    pub fn all_brews(&self) -> Result<Vec<BrewRow>> {
        let mut stmt = self
            .conn
            .prepare_cached(&format!("SELECT {SELECT_COLUMNS} FROM brews ORDER BY date DESC"))?;

        let mut brews = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            brews.push(read_row(row)?);
        }
        Ok(brews)
    }

    /// The ID of the most-recently-dated brew, or `None` for an empty table.
    pub fn latest_brew_id(&self) -> Result<Option<i64>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id FROM brews ORDER BY date DESC LIMIT 1")?;

        match stmt.query_row([], |row| row.get(0)) {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Count stored brews.
    pub fn count_brews(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM brews", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
