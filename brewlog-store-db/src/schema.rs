// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Database schema definitions for the brew journal.
//!
//! Everything that names a column lives here: the creation script, the
//! migration target set, the update allow-list, and the SELECT column
//! list shared by all row-reading queries.

/// Core schema SQL. Databases created before the per-dimension rating
/// columns existed are brought up to date by [`RATING_COLUMNS`] migration,
/// not by this script.
pub const SCHEMA_SQL: &str = r#"
create table if not exists brews (
    id                       integer primary key autoincrement,
    date                     text not null,
    type                     text not null,
    method                   text,
    dose_g                   real not null,
    water_weight_g           real not null,
    water_volume_ml          real,
    water_temp_c             real,
    grind                    text,
    duration_s               integer,
    notes                    text,
    coffee_roast_date        text,
    coffee_type              text,
    coffee_origin            text,
    coffee_varietal          text,
    coffee_process           text,
    water_ppm                real,
    equipment_grinder        text,
    equipment_brewer         text,
    result_tds               real,
    result_ey                real,
    result_brix              real,
    result_tasting_notes     text,
    result_ratings           text,
    result_rating_overall    integer,
    result_rating_fragrance  integer,
    result_rating_aroma      integer,
    result_rating_flavour    integer,
    result_rating_aftertaste integer,
    result_rating_acidity    integer,
    result_rating_sweetness  integer,
    result_rating_mouthfeel  integer
);

create index if not exists idx_brews_date on brews (date desc);
"#;

/// Migration target set: the per-dimension rating columns added in format
/// 0.3. Migration diffs `PRAGMA table_info(brews)` against this list and
/// adds each absentee as an INTEGER column. Existing rows are never touched.
pub const RATING_COLUMNS: [&str; 8] = [
    "result_rating_overall",
    "result_rating_fragrance",
    "result_rating_aroma",
    "result_rating_flavour",
    "result_rating_aftertaste",
    "result_rating_acidity",
    "result_rating_sweetness",
    "result_rating_mouthfeel",
];

/// Columns that [`Store::update_brew`](crate::Store::update_brew) may set.
/// Identity (`id`), `date`, `type`, `dose_g`, and `water_weight_g` are
/// deliberately absent, as is the legacy `result_ratings` blob.
pub const UPDATABLE_COLUMNS: [&str; 25] = [
    "method",
    "grind",
    "water_temp_c",
    "duration_s",
    "notes",
    "result_tds",
    "result_ey",
    "result_brix",
    "result_tasting_notes",
    "result_rating_overall",
    "result_rating_fragrance",
    "result_rating_aroma",
    "result_rating_flavour",
    "result_rating_aftertaste",
    "result_rating_acidity",
    "result_rating_sweetness",
    "result_rating_mouthfeel",
    "coffee_roast_date",
    "coffee_type",
    "coffee_origin",
    "coffee_varietal",
    "coffee_process",
    "water_ppm",
    "equipment_grinder",
    "equipment_brewer",
];

/// Column list for row reads, in schema order. Spelled out rather than
/// `SELECT *` so migrated and freshly created databases read identically.
pub(crate) const SELECT_COLUMNS: &str = "id, date, type, method, dose_g, water_weight_g, \
     water_volume_ml, water_temp_c, grind, duration_s, notes, \
     coffee_roast_date, coffee_type, coffee_origin, coffee_varietal, coffee_process, \
     water_ppm, equipment_grinder, equipment_brewer, \
     result_tds, result_ey, result_brix, result_tasting_notes, result_ratings, \
     result_rating_overall, result_rating_fragrance, result_rating_aroma, \
     result_rating_flavour, result_rating_aftertaste, result_rating_acidity, \
     result_rating_sweetness, result_rating_mouthfeel";
