// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Error types for document handling.

use thiserror::Error;

/// Result type for document handling operations.
pub type Result<T> = std::result::Result<T, SpecError>;

/// Errors that can occur while gating, decoding, or serialising documents.
#[derive(Error, Debug)]
pub enum SpecError {
    /// Document carries a version tag this release does not read.
    ///
    /// `found` is the tag from the file, or the literal text `missing` when
    /// the key is absent or not a string. The message wording is a contract
    /// with users upgrading old exports; change it only together with the
    /// upgrade guide.
    #[error(
        "unsupported BrewSpec version '{found}'. This release of brewlog reads BrewSpec 0.4 only.\n\
         To upgrade an older document:\n  \
         - move top-level 'tds' to 'result.tds'\n  \
         - move top-level 'ey' to 'result.ey'\n  \
         - move top-level 'rating' to 'result.ratings.overall'\n  \
         - 'grind' must be one of: coarse, espresso, fine, medium, medium_coarse, medium_fine, turkish\n\
         See docs/UPGRADING.md for the full migration guide."
    )]
    UnsupportedVersion { found: String },

    /// Parsed file is not a map at the top level.
    #[error("file content is not a valid BrewSpec document.")]
    NotADocument,

    /// A stored column that should hold JSON does not decode.
    #[error("brew #{brew_id}: column '{column}' holds corrupt JSON: {source}")]
    CorruptColumn {
        brew_id: i64,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
