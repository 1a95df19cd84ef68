// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! CLI-level error type and its user-facing rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Anything a subcommand can fail with.
///
/// Most variants render as `Error: <message>`; the exceptions carry their
/// own complete wording (see [`CliError::user_message`]).
#[derive(Error, Debug)]
pub enum CliError {
    /// Free-form usage error, rendered with the `Error: ` prefix.
    #[error("{0}")]
    Usage(String),

    /// A complete message printed verbatim, without the `Error: ` prefix.
    #[error("{0}")]
    Bare(String),

    /// Document schema violations found during import.
    #[error("document validation failed ({} violations)", .0.len())]
    Validation(Vec<String>),

    /// The document we just serialised for export does not pass our own
    /// schema validation.
    #[error("serialised document failed schema validation")]
    InternalConsistency(Vec<String>),

    #[error("{0}")]
    Spec(#[from] brewlog_spec::SpecError),

    #[error("{0}")]
    Model(#[from] brewlog_model::ValidationError),

    #[error("{0}")]
    Store(#[from] brewlog_store_db::Error),

    #[error("{0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// The full text printed to stderr when this error terminates a command.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(violations) => {
                let mut out = String::from("Validation failed:");
                for violation in violations {
                    out.push_str(&format!("\n  - {violation}"));
                }
                out
            }
            Self::InternalConsistency(violations) => {
                let mut out =
                    String::from("Internal error: serialised document failed schema validation.");
                for violation in violations {
                    out.push_str(&format!("\n  - {violation}"));
                }
                out
            }
            Self::Bare(message) => message.clone(),
            other => format!("Error: {other}"),
        }
    }
}

/// Helper trait for adding context to IO errors
pub trait IoContext<T> {
    fn io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CliError::io(f(), e))
    }
}
