// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database row types for the brew journal.

/// One stored brew, column-for-column.
///
/// Text columns are kept as stored: `coffee_origin` is the raw JSON-encoded
/// list and `result_ratings` the legacy ratings blob. Decoding belongs to the
/// layers that need it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrewRow {
    /// Database row ID
    pub id: i64,
    /// Record timestamp (full date-time, or bare date since format 0.4)
    pub date: String,
    /// Brew method category (the `type` column)
    pub brew_type: String,
    pub method: Option<String>,
    pub dose_g: f64,
    pub water_weight_g: f64,
    pub water_volume_ml: Option<f64>,
    pub water_temp_c: Option<f64>,
    /// Grind coarseness; freeform text in rows written by pre-0.4 releases
    pub grind: Option<String>,
    pub duration_s: Option<i64>,
    pub notes: Option<String>,
    pub coffee_roast_date: Option<String>,
    pub coffee_type: Option<String>,
    /// JSON-encoded list of origin strings
    pub coffee_origin: Option<String>,
    pub coffee_varietal: Option<String>,
    pub coffee_process: Option<String>,
    pub water_ppm: Option<f64>,
    pub equipment_grinder: Option<String>,
    pub equipment_brewer: Option<String>,
    pub result_tds: Option<f64>,
    pub result_ey: Option<f64>,
    pub result_brix: Option<f64>,
    pub result_tasting_notes: Option<String>,
    /// Legacy pre-0.3 ratings blob; read only as a display fallback
    pub result_ratings: Option<String>,
    pub result_rating_overall: Option<i64>,
    pub result_rating_fragrance: Option<i64>,
    pub result_rating_aroma: Option<i64>,
    pub result_rating_flavour: Option<i64>,
    pub result_rating_aftertaste: Option<i64>,
    pub result_rating_acidity: Option<i64>,
    pub result_rating_sweetness: Option<i64>,
    pub result_rating_mouthfeel: Option<i64>,
}

impl BrewRow {
    /// Per-dimension rating values in canonical order, paired with their
    /// names.
    pub fn rating_dimensions(&self) -> [(&'static str, Option<i64>); 8] {
        [
            ("overall", self.result_rating_overall),
            ("fragrance", self.result_rating_fragrance),
            ("aroma", self.result_rating_aroma),
            ("flavour", self.result_rating_flavour),
            ("aftertaste", self.result_rating_aftertaste),
            ("acidity", self.result_rating_acidity),
            ("sweetness", self.result_rating_sweetness),
            ("mouthfeel", self.result_rating_mouthfeel),
        ]
    }

    /// Overall rating for display: the individual column when set, else the
    /// `overall` key of the legacy blob, else none. Interchange documents
    /// never use this fallback.
    pub fn overall_rating(&self) -> Option<i64> {
        if self.result_rating_overall.is_some() {
            return self.result_rating_overall;
        }
        let blob = self.result_ratings.as_deref()?;
        let value: serde_json::Value = serde_json::from_str(blob).ok()?;
        value.get("overall")?.as_i64()
    }
}

/// Filter and pagination options for listing brews.
///
/// All set filters are AND-composed. Date bounds compare at day granularity
/// so they apply uniformly to both stored date shapes.
#[derive(Debug, Clone)]
pub struct ListFilter {
    /// Exact match on the brew type column
    pub brew_type: Option<String>,
    /// Inclusive lower date bound (`YYYY-MM-DD`)
    pub since: Option<String>,
    /// Inclusive upper date bound (`YYYY-MM-DD`)
    pub until: Option<String>,
    /// Minimum overall rating (inclusive)
    pub rating_min: Option<i64>,
    /// Maximum overall rating (inclusive)
    pub rating_max: Option<i64>,
    /// Maximum rows to return (ignored when `all_rows` is set)
    pub limit: u32,
    /// Return every matching row
    pub all_rows: bool,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            brew_type: None,
            since: None,
            until: None,
            rating_min: None,
            rating_max: None,
            limit: 20,
            all_rows: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::column_wins(Some(4), Some(r#"{"overall": 2}"#), Some(4))]
    #[case::blob_fallback(None, Some(r#"{"overall": 3, "acidity": 4}"#), Some(3))]
    #[case::blob_not_json(None, Some("not json"), None)]
    #[case::blob_without_overall(None, Some(r#"{"acidity": 4}"#), None)]
    #[case::nothing_stored(None, None, None)]
    fn test_overall_rating_precedence(
        #[case] column: Option<i64>,
        #[case] blob: Option<&str>,
        #[case] expected: Option<i64>,
    ) {
        let row = BrewRow {
            result_rating_overall: column,
            result_ratings: blob.map(str::to_owned),
            ..Default::default()
        };
        assert_eq!(row.overall_rating(), expected);
    }

    #[test]
    fn test_default_filter_limits_to_twenty() {
        let filter = ListFilter::default();
        assert_eq!(filter.limit, 20);
        assert!(!filter.all_rows);
    }
}
