// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog show`: every stored field of one brew.

use brewlog_store_db::Store;
use clap::Args;

use crate::error::{CliError, Result};
use crate::render;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Brew ID
    pub id: i64,
}

pub fn run(store: &Store, args: &ShowArgs) -> Result<()> {
    match store.get_brew(args.id)? {
        Some(row) => {
            print!("{}", render::show_brew(&row));
            Ok(())
        }
        None => Err(CliError::Bare(format!(
            "No brew found with ID {}.",
            args.id
        ))),
    }
}
