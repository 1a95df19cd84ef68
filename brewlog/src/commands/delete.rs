// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog delete`: remove one brew after confirmation.

use brewlog_store_db::Store;
use clap::Args;

use crate::error::{CliError, Result};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Brew ID
    pub id: i64,

    /// Skip confirmation prompt and delete immediately
    #[arg(long)]
    pub force: bool,
}

pub fn run(
    store: &Store,
    args: &DeleteArgs,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Result<()> {
    if args.id <= 0 {
        return Err(CliError::usage("brew ID must be a positive integer."));
    }

    if store.get_brew(args.id)?.is_none() {
        return Err(CliError::usage(format!("brew #{} not found.", args.id)));
    }

    if !args.force && !confirm(&format!("Delete brew #{}? [y/N]", args.id)) {
        println!("Cancelled.");
        return Ok(());
    }

    store.delete_brew(args.id)?;
    println!("Brew #{} deleted.", args.id);
    Ok(())
}
