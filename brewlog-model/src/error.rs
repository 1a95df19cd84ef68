// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Field-scoped validation errors.

use thiserror::Error;

/// A validation failure for a single record field.
///
/// `field` is the structural name of the offending field (e.g. `date`,
/// `coffee.origin`); `message` describes the violated constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
