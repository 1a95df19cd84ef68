// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Whole-document validation behaviour: complete reporting, deterministic
//! ordering, and the version gate's precedence over everything else.

use brewlog_spec::{SpecError, check_document_version, validate_document};
use serde_json::{Value, json};

#[test]
fn test_every_violation_is_reported_in_walk_order() {
    // Three brews, each broken differently, plus a stray top-level key.
    // The report must list all of it, brews in list order, fields in
    // schema order within each brew.
    let doc = json!({
        "brewspec_version": "0.4",
        "exported_by": "someone",
        "brews": [
            {
                "type": "pour_over",
                "dose_g": 18.0,
                "water_weight_g": 280.0,
            },
            {
                "date": "2026-02-19",
                "type": "espresso",
                "dose_g": -1.0,
                "water_weight_g": 36.0,
                "grind": "fine-ish",
                "result": {"ratings": {"overall": 9}},
            },
            {
                "date": "2026-02-20",
                "type": "espresso",
                "dose_g": 18.0,
                "water_weight_g": 36.0,
                "coffee": {"origin": []},
            },
        ],
    });

    assert_eq!(
        validate_document(&doc),
        [
            "brews[0]: missing required key 'date'",
            "brews[1].dose_g: must be a number greater than 0",
            "brews[1].grind: must be one of: coarse, espresso, fine, medium, medium_coarse, medium_fine, turkish",
            "brews[1].result.ratings.overall: must be an integer between 1 and 5",
            "brews[2].coffee.origin: must be a non-empty list of strings",
            "unexpected key 'exported_by'",
        ]
    );
}

#[test]
fn test_validation_is_deterministic() {
    let doc = json!({
        "brewspec_version": "0.3",
        "brews": [
            {"date": "bad", "type": "worse"},
            {"tds": 1.0},
        ],
    });
    let first = validate_document(&doc);
    let second = validate_document(&doc);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_validation_never_mutates_the_document() {
    let doc = json!({
        "brewspec_version": "0.4",
        "brews": [{"date": "2026-02-19", "type": "pour_over"}],
    });
    let before = doc.clone();
    let _ = validate_document(&doc);
    assert_eq!(doc, before);
}

#[test]
fn test_version_gate_wins_over_schema_validation() {
    // A 0.3 document full of schema violations: the gate must reject it
    // on the version tag alone, before any field is inspected.
    let doc = json!({
        "brewspec_version": "0.3",
        "brews": [{"tds": "not even a number", "rating": 11}],
    });
    let err = check_document_version(&doc).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("unsupported BrewSpec version '0.3'."));
    assert!(message.contains("move top-level 'tds' to 'result.tds'"));
    assert!(message.contains("move top-level 'ey' to 'result.ey'"));
    assert!(message.contains("move top-level 'rating' to 'result.ratings.overall'"));
}

#[test]
fn test_gate_treats_non_string_tags_as_missing() {
    for doc in [
        json!({"brews": []}),
        json!({"brewspec_version": 0.4, "brews": []}),
        json!({"brewspec_version": null, "brews": []}),
        Value::Null,
    ] {
        match check_document_version(&doc) {
            Err(SpecError::UnsupportedVersion { found }) => assert_eq!(found, "missing"),
            other => panic!("expected version rejection, got {other:?}"),
        }
    }
}
