// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, IoContext};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Path to the journal database
    pub db_path: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: "info".to_string(),
        }
    }
}

fn default_db_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".brewlog").join("brews.db"),
        None => PathBuf::from(".brewlog/brews.db"),
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path)
            .io_context(|| format!("Failed to read config file at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Resolve the effective configuration: the file named by
    /// `$BREWLOG_CONFIG` when set, built-in defaults otherwise.
    pub fn load() -> Result<Self, CliError> {
        match std::env::var("BREWLOG_CONFIG") {
            Ok(path) => Self::from_file(&PathBuf::from(path)),
            Err(_) => Ok(Self::default()),
        }
    }
}
