// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Subcommand implementations.
//!
//! Each command is a plain function over an open [`Store`](brewlog_store_db::Store)
//! and its parsed arguments, so integration tests can drive them without
//! spawning the binary. Confirmation prompts are injected as closures for
//! the same reason.

pub mod add;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod show;
pub mod update;

use std::io::Write;

/// Ask a yes/no question on the terminal, defaulting to no.
pub fn confirm_stdin(prompt: &str) -> bool {
    print!("{prompt} ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
