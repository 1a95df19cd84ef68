// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use brewlog::cli::{ASCII_CUP, Cli, Command};
use brewlog::commands;
use brewlog::config::Config;
use brewlog::error::{IoContext, Result};
use brewlog_store_db::Store;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::debug;

fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    let Some(command) = cli.command else {
        print!("{ASCII_CUP}");
        println!("BrewLog v{}\n", env!("CARGO_PKG_VERSION"));
        Cli::command()
            .print_help()
            .io_context(|| "failed to print help".to_string())?;
        return Ok(());
    };

    let db_path = cli.db.unwrap_or(config.db_path);
    debug!("Using database at {}", db_path.display());
    let mut store = Store::open(&db_path)?;

    match command {
        Command::Add(args) => commands::add::run(&store, &args),
        Command::List(args) => commands::list::run(&store, &args),
        Command::Show(args) => commands::show::run(&store, &args),
        Command::Update(args) => commands::update::run(&store, &args),
        Command::Delete(args) => {
            commands::delete::run(&store, &args, &mut commands::confirm_stdin)
        }
        Command::Export(args) => {
            commands::export::run(&store, &args, &mut commands::confirm_stdin)
        }
        Command::Import(args) => commands::import::run(&mut store, &args),
    }
}

fn main() -> ExitCode {
    match dispatch(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
