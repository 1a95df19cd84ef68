// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Smoke tests for brewlog-store-db.
//!
//! These tests verify the schema, migration, and basic operations work
//! correctly using in-memory and temporary-file databases.

use brewlog_model::{BrewDraft, BrewRecord, BrewResult, Coffee, Ratings};
use brewlog_store_db::{Error, ListFilter, NewBrewRow, Store};
use rusqlite::types::Value;

fn sample_record() -> BrewRecord {
    BrewRecord::validate(BrewDraft {
        date: "2026-02-19T08:30:00Z".into(),
        brew_type: "pour_over".into(),
        dose_g: 18.0,
        water_weight_g: 280.0,
        method: Some("V60".into()),
        grind: Some("medium_fine".into()),
        coffee: Some(Coffee {
            roast_date: Some("2026-02-01".into()),
            origin: Some(vec!["Ethiopia".into(), "Colombia".into()]),
            ..Default::default()
        }),
        result: Some(BrewResult {
            tds: Some(1.38),
            ratings: Some(Ratings {
                overall: Some(4),
                acidity: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    })
    .unwrap()
}

fn row(date: &str, brew_type: &str, overall: Option<i64>) -> NewBrewRow {
    NewBrewRow {
        date: date.into(),
        brew_type: brew_type.into(),
        dose_g: 18.0,
        water_weight_g: 280.0,
        result_rating_overall: overall,
        ..Default::default()
    }
}

/// Verify schema creation and empty queries work.
#[test]
fn test_schema_creation() {
    let store = Store::open_memory().unwrap();
    assert!(store.has_schema().unwrap());
    assert_eq!(store.count_brews().unwrap(), 0);
    assert_eq!(store.latest_brew_id().unwrap(), None);
    assert_eq!(store.get_brew(1).unwrap(), None);
}

/// Verify record insert and row fetch roundtrip.
#[test]
fn test_insert_and_get_roundtrip() {
    let store = Store::open_memory().unwrap();

    let id = store.insert_brew(&sample_record()).unwrap();
    assert!(id > 0);

    let row = store.get_brew(id).unwrap().unwrap();
    assert_eq!(row.date, "2026-02-19T08:30:00Z");
    assert_eq!(row.brew_type, "pour_over");
    assert_eq!(row.method.as_deref(), Some("V60"));
    assert_eq!(row.grind.as_deref(), Some("medium_fine"));
    assert_eq!(row.coffee_origin.as_deref(), Some(r#"["Ethiopia","Colombia"]"#));
    assert_eq!(row.result_tds, Some(1.38));
    assert_eq!(row.result_rating_overall, Some(4));
    assert_eq!(row.result_rating_acidity, Some(3));
    assert_eq!(row.result_rating_flavour, None);
    // New rows never carry the legacy blob.
    assert_eq!(row.result_ratings, None);
}

/// Verify list ordering, filters, and the limit.
#[test]
fn test_list_brews_filters() {
    let mut store = Store::open_memory().unwrap();

    store
        .insert_brews(&[
            row("2026-02-17T07:00:00Z", "espresso", Some(2)),
            row("2026-02-18", "pour_over", Some(5)),
            row("2026-02-19T08:30:00Z", "pour_over", None),
        ])
        .unwrap();

    let all = store.list_brews(&ListFilter::default()).unwrap();
    let dates: Vec<&str> = all.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(
        dates,
        ["2026-02-19T08:30:00Z", "2026-02-18", "2026-02-17T07:00:00Z"]
    );

    let filter = ListFilter {
        brew_type: Some("pour_over".into()),
        ..Default::default()
    };
    assert_eq!(store.list_brews(&filter).unwrap().len(), 2);

    // Day-granularity bounds apply to both stored date shapes.
    let filter = ListFilter {
        since: Some("2026-02-18".into()),
        until: Some("2026-02-18".into()),
        ..Default::default()
    };
    let hits = store.list_brews(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, "2026-02-18");

    // Rating bounds skip rows without an overall rating.
    let filter = ListFilter {
        rating_min: Some(3),
        ..Default::default()
    };
    let hits = store.list_brews(&filter).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].result_rating_overall, Some(5));

    let filter = ListFilter {
        limit: 2,
        ..Default::default()
    };
    assert_eq!(store.list_brews(&filter).unwrap().len(), 2);

    let filter = ListFilter {
        limit: 2,
        all_rows: true,
        ..Default::default()
    };
    assert_eq!(store.list_brews(&filter).unwrap().len(), 3);
}

/// Verify the latest-brew lookup follows date order, not insert order.
#[test]
fn test_latest_brew_id() {
    let mut store = Store::open_memory().unwrap();

    let ids = store
        .insert_brews(&[
            row("2026-02-19T08:30:00Z", "espresso", None),
            row("2026-02-10T08:30:00Z", "espresso", None),
        ])
        .unwrap();

    assert_eq!(store.latest_brew_id().unwrap(), Some(ids[0]));
}

/// Verify allow-listed updates succeed and others are rejected up front.
#[test]
fn test_update_allow_list() {
    let store = Store::open_memory().unwrap();
    let id = store.insert_brew(&sample_record()).unwrap();

    let updated = store
        .update_brew(
            id,
            &[
                ("notes".into(), Value::Text("bloomed 45s".into())),
                ("result_rating_overall".into(), Value::Integer(5)),
            ],
        )
        .unwrap();
    assert!(updated);

    let row = store.get_brew(id).unwrap().unwrap();
    assert_eq!(row.notes.as_deref(), Some("bloomed 45s"));
    assert_eq!(row.result_rating_overall, Some(5));

    let err = store
        .update_brew(id, &[("date".into(), Value::Text("2030-01-01".into()))])
        .unwrap_err();
    assert!(matches!(err, Error::DisallowedColumn(col) if col == "date"));

    // The rejected update must not have touched the row.
    let row = store.get_brew(id).unwrap().unwrap();
    assert_eq!(row.date, "2026-02-19T08:30:00Z");
}

/// Verify updates against a missing row report not-found.
#[test]
fn test_update_missing_row() {
    let store = Store::open_memory().unwrap();
    let updated = store
        .update_brew(999, &[("notes".into(), Value::Text("x".into()))])
        .unwrap();
    assert!(!updated);
}

/// Verify deletion reports whether a row existed.
#[test]
fn test_delete_brew() {
    let store = Store::open_memory().unwrap();
    let id = store.insert_brew(&sample_record()).unwrap();

    assert!(store.delete_brew(id).unwrap());
    assert_eq!(store.get_brew(id).unwrap(), None);
    assert!(!store.delete_brew(id).unwrap());
}

/// Verify opening a database created before the per-dimension rating
/// columns adds them without touching existing data.
#[test]
fn test_migration_adds_rating_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brews.db");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            create table brews (
                id                   integer primary key autoincrement,
                date                 text not null,
                type                 text not null,
                method               text,
                dose_g               real not null,
                water_weight_g       real not null,
                water_volume_ml      real,
                water_temp_c         real,
                grind                text,
                duration_s           integer,
                notes                text,
                coffee_roast_date    text,
                coffee_type          text,
                coffee_origin        text,
                coffee_varietal      text,
                coffee_process       text,
                water_ppm            real,
                equipment_grinder    text,
                equipment_brewer     text,
                result_tds           real,
                result_ey            real,
                result_brix          real,
                result_tasting_notes text,
                result_ratings       text
            );
            "#,
        )
        .unwrap();
        conn.execute(
            "INSERT INTO brews (date, type, dose_g, water_weight_g, grind, result_ratings)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                "2025-11-02T09:00:00Z",
                "immersion",
                20.0,
                320.0,
                "a bit coarser than drip",
                r#"{"overall": 3}"#,
            ],
        )
        .unwrap();
    }

    let store = Store::open(&path).unwrap();
    let row = store.get_brew(1).unwrap().unwrap();

    // Legacy data survives; the new columns read NULL.
    assert_eq!(row.grind.as_deref(), Some("a bit coarser than drip"));
    assert_eq!(row.result_rating_overall, None);
    assert_eq!(row.overall_rating(), Some(3));

    // New inserts use the migrated columns.
    let id = store.insert_brew(&sample_record()).unwrap();
    let row = store.get_brew(id).unwrap().unwrap();
    assert_eq!(row.result_rating_overall, Some(4));

    // A second open is a no-op.
    drop(store);
    let store = Store::open(&path).unwrap();
    assert_eq!(store.count_brews().unwrap(), 2);
}

/// Verify opening creates missing parent directories.
#[test]
fn test_open_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("brews.db");

    let store = Store::open(&path).unwrap();
    assert!(store.has_schema().unwrap());
    assert!(path.exists());
}
