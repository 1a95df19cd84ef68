// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! Command-line argument surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::add::AddArgs;
use crate::commands::delete::DeleteArgs;
use crate::commands::export::ExportArgs;
use crate::commands::import::ImportArgs;
use crate::commands::list::ListArgs;
use crate::commands::show::ShowArgs;
use crate::commands::update::UpdateArgs;

pub const ASCII_CUP: &str = r"    ( (
     ) )
  .______.
  |      |]
  \      /
   `----'
";

#[derive(Parser, Debug)]
#[command(
    name = "brewlog",
    version,
    about = "BrewLog - a local brew tracker using the BrewSpec format"
)]
pub struct Cli {
    /// Path to the journal database (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a new brew
    Add(AddArgs),
    /// List recent brews
    List(ListArgs),
    /// Show all fields for a brew by ID
    Show(ShowArgs),
    /// Update optional fields on an existing brew (defaults to the last brew)
    Update(UpdateArgs),
    /// Delete a brew by ID
    ///
    /// IDs are permanent: deleting a brew leaves a gap in the sequence,
    /// IDs are never reused or resequenced.
    Delete(DeleteArgs),
    /// Export all brews to a BrewSpec 0.4 file
    Export(ExportArgs),
    /// Import brews from a BrewSpec 0.4 YAML or JSON file
    Import(ImportArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_requires_the_four_core_flags() {
        let result = Cli::try_parse_from(["brewlog", "add", "--date", "2026-02-19"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "brewlog", "add", "--date", "2026-02-19", "--type", "pour_over", "--dose", "18",
            "--water", "280",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_global_db_flag_applies_to_subcommands() {
        let cli = Cli::try_parse_from(["brewlog", "list", "--db", "/tmp/j.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/j.db")));
    }

    #[test]
    fn test_origin_flag_is_repeatable() {
        let cli = Cli::try_parse_from([
            "brewlog", "add", "--date", "2026-02-19", "--type", "pour_over", "--dose", "18",
            "--water", "280", "--origin", "Ethiopia", "--origin", "Colombia",
        ])
        .unwrap();
        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.origin, vec!["Ethiopia", "Colombia"]);
    }
}
