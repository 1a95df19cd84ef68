// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! BrewSpec document handling: schema validation and the bidirectional
//! mapping between stored rows and interchange documents.
//!
//! A BrewSpec document is a parsed `serde_json::Value` regardless of whether
//! it arrived as YAML or JSON; everything in this crate operates on that
//! common form. Validation reports violations, it never mutates. The
//! serializer converts whole rows to document brews and back, dropping
//! nothing silently: legacy grind values that predate the fixed enumeration
//! are reported to the caller for warning output.

mod error;
mod serialize;
mod validate;

pub use error::{Result, SpecError};
pub use serialize::{DroppedGrind, brew_to_row, row_to_brew, rows_to_document};
pub use validate::{check_document_version, validate_document};
