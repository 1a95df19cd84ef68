// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Field-level constraint checks shared across the record model.

use crate::error::ValidationError;

/// Maximum length for short descriptors (method, varietal, equipment names).
pub const SHORT_TEXT_MAX: usize = 100;

/// Maximum length for notes and tasting notes.
pub const LONG_TEXT_MAX: usize = 2000;

/// Non-empty after trim, at most 100 characters.
pub fn validate_short_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "must not be empty when provided",
        ));
    }
    if value.chars().count() > SHORT_TEXT_MAX {
        return Err(ValidationError::new(
            field,
            format!("must not exceed {SHORT_TEXT_MAX} characters"),
        ));
    }
    Ok(())
}

/// Non-empty after trim, at most 2000 characters.
pub fn validate_long_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "must not be empty when provided",
        ));
    }
    if value.chars().count() > LONG_TEXT_MAX {
        return Err(ValidationError::new(
            field,
            format!("must not exceed {LONG_TEXT_MAX} characters"),
        ));
    }
    Ok(())
}

/// Strictly greater than zero.
pub fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        return Err(ValidationError::new(field, "must be greater than 0"));
    }
    Ok(())
}

/// Strictly greater than zero, integer form.
pub fn validate_positive_int(field: &str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::new(field, "must be greater than 0"));
    }
    Ok(())
}

/// Greater than or equal to zero.
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::new(field, "must be >= 0"));
    }
    Ok(())
}

/// Within [0, 100], for water temperature.
pub fn validate_temperature(field: &str, value: f64) -> Result<(), ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::new(
            field,
            "must be between 0 and 100 inclusive",
        ));
    }
    Ok(())
}

/// Within [1, 5], for rating dimensions.
pub fn validate_rating(field: &str, value: i64) -> Result<(), ValidationError> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::new(
            field,
            "must be between 1 and 5 inclusive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("V60", true)]
    #[case::at_limit(&"x".repeat(100), true)]
    #[case::over_limit(&"x".repeat(101), false)]
    #[case::empty("", false)]
    #[case::whitespace_only("   ", false)]
    fn test_short_text_bounds(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(validate_short_text("method", value).is_ok(), ok);
    }

    #[rstest]
    #[case::at_limit(&"x".repeat(2000), true)]
    #[case::over_limit(&"x".repeat(2001), false)]
    #[case::whitespace_only(" \t ", false)]
    fn test_long_text_bounds(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(validate_long_text("notes", value).is_ok(), ok);
    }

    #[rstest]
    #[case::positive(18.0, true)]
    #[case::zero(0.0, false)]
    #[case::negative(-1.0, false)]
    fn test_positive_bounds(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(validate_positive("dose_g", value).is_ok(), ok);
    }

    #[rstest]
    #[case::zero(0.0, true)]
    #[case::negative(-0.1, false)]
    fn test_non_negative_bounds(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(validate_non_negative("water.ppm", value).is_ok(), ok);
    }

    #[rstest]
    #[case::freezing(0.0, true)]
    #[case::boiling(100.0, true)]
    #[case::above_boiling(100.1, false)]
    #[case::below_freezing(-0.1, false)]
    fn test_temperature_bounds(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(validate_temperature("water_temp_c", value).is_ok(), ok);
    }

    #[rstest]
    #[case::low(1, true)]
    #[case::high(5, true)]
    #[case::below(0, false)]
    #[case::above(6, false)]
    fn test_rating_bounds(#[case] value: i64, #[case] ok: bool) {
        assert_eq!(validate_rating("result.ratings.overall", value).is_ok(), ok);
    }
}
