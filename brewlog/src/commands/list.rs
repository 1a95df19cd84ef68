// SPDX-FileCopyrightText: 2025 Jörg Thalheim
// SPDX-License-Identifier: MIT

//! `brewlog list`: filtered table of recent brews.

use brewlog_model::{BrewType, is_valid_date};
use brewlog_store_db::{ListFilter, Store};
use clap::Args;

use crate::error::{CliError, Result};
use crate::render;

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Number of brews to show (default: 20)
    #[arg(long, default_value_t = 20)]
    pub limit: i64,

    /// Show all brews
    #[arg(long)]
    pub all: bool,

    /// Filter by brew type: immersion, pour_over, espresso, hybrid
    #[arg(long = "type", value_name = "TYPE")]
    pub brew_type: Option<String>,

    /// Filter brews on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Filter brews on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,

    /// Filter brews with overall rating >= N (1-5)
    #[arg(long)]
    pub rating_min: Option<i64>,

    /// Filter brews with overall rating <= N (1-5)
    #[arg(long)]
    pub rating_max: Option<i64>,
}

impl ListArgs {
    fn has_filters(&self) -> bool {
        self.brew_type.is_some()
            || self.since.is_some()
            || self.until.is_some()
            || self.rating_min.is_some()
            || self.rating_max.is_some()
    }
}

pub fn build_filter(args: &ListArgs) -> Result<ListFilter> {
    if !args.all && args.limit <= 0 {
        return Err(CliError::usage("--limit must be a positive integer."));
    }

    if let Some(brew_type) = &args.brew_type
        && brew_type.parse::<BrewType>().is_err()
    {
        return Err(CliError::usage(format!(
            "invalid brew type '{brew_type}'. Must be one of: {}.",
            BrewType::allowed()
        )));
    }

    if let Some(since) = &args.since
        && !is_valid_date(since)
    {
        return Err(CliError::usage(format!(
            "--since '{since}' is not a valid date. Use YYYY-MM-DD format."
        )));
    }

    if let Some(until) = &args.until
        && !is_valid_date(until)
    {
        return Err(CliError::usage(format!(
            "--until '{until}' is not a valid date. Use YYYY-MM-DD format."
        )));
    }

    if let (Some(since), Some(until)) = (&args.since, &args.until)
        && since > until
    {
        return Err(CliError::usage(format!(
            "--since '{since}' cannot be later than --until '{until}'."
        )));
    }

    if let Some(rating_min) = args.rating_min
        && !(1..=5).contains(&rating_min)
    {
        return Err(CliError::usage(
            "--rating-min must be an integer between 1 and 5.",
        ));
    }

    if let Some(rating_max) = args.rating_max
        && !(1..=5).contains(&rating_max)
    {
        return Err(CliError::usage(
            "--rating-max must be an integer between 1 and 5.",
        ));
    }

    if let (Some(rating_min), Some(rating_max)) = (args.rating_min, args.rating_max)
        && rating_min > rating_max
    {
        return Err(CliError::usage(format!(
            "--rating-min {rating_min} cannot exceed --rating-max {rating_max}."
        )));
    }

    Ok(ListFilter {
        brew_type: args.brew_type.clone(),
        since: args.since.clone(),
        until: args.until.clone(),
        rating_min: args.rating_min,
        rating_max: args.rating_max,
        limit: args.limit as u32,
        all_rows: args.all,
    })
}

pub fn run(store: &Store, args: &ListArgs) -> Result<()> {
    let filter = build_filter(args)?;
    let rows = store.list_brews(&filter)?;

    if rows.is_empty() {
        if args.has_filters() {
            println!("No brews match the given filters.");
        } else {
            println!("No brews logged yet. Run 'brewlog add' to get started.");
        }
        return Ok(());
    }

    print!("{}", render::list_table(&rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn default_args() -> ListArgs {
        ListArgs {
            limit: 20,
            ..Default::default()
        }
    }

    #[rstest]
    #[case(
        ListArgs { limit: 0, ..default_args() },
        "Error: --limit must be a positive integer."
    )]
    #[case(
        ListArgs { brew_type: Some("drip".into()), ..default_args() },
        "Error: invalid brew type 'drip'. Must be one of: espresso, hybrid, immersion, pour_over."
    )]
    #[case(
        ListArgs { since: Some("2026-02-31".into()), ..default_args() },
        "Error: --since '2026-02-31' is not a valid date. Use YYYY-MM-DD format."
    )]
    #[case(
        ListArgs { until: Some("not-a-date".into()), ..default_args() },
        "Error: --until 'not-a-date' is not a valid date. Use YYYY-MM-DD format."
    )]
    #[case(
        ListArgs {
            since: Some("2026-03-01".into()),
            until: Some("2026-02-01".into()),
            ..default_args()
        },
        "Error: --since '2026-03-01' cannot be later than --until '2026-02-01'."
    )]
    #[case(
        ListArgs { rating_min: Some(0), ..default_args() },
        "Error: --rating-min must be an integer between 1 and 5."
    )]
    #[case(
        ListArgs { rating_max: Some(6), ..default_args() },
        "Error: --rating-max must be an integer between 1 and 5."
    )]
    #[case(
        ListArgs { rating_min: Some(4), rating_max: Some(2), ..default_args() },
        "Error: --rating-min 4 cannot exceed --rating-max 2."
    )]
    fn test_filter_validation_messages(#[case] args: ListArgs, #[case] expected: &str) {
        let err = build_filter(&args).unwrap_err();
        assert_eq!(err.user_message(), expected);
    }

    #[test]
    fn test_all_flag_skips_limit_check() {
        let args = ListArgs {
            limit: 0,
            all: true,
            ..default_args()
        };
        let filter = build_filter(&args).unwrap();
        assert!(filter.all_rows);
    }

    #[test]
    fn test_filters_carry_over() {
        let args = ListArgs {
            brew_type: Some("espresso".into()),
            since: Some("2026-01-01".into()),
            rating_min: Some(3),
            ..default_args()
        };
        let filter = build_filter(&args).unwrap();
        assert_eq!(filter.brew_type.as_deref(), Some("espresso"));
        assert_eq!(filter.since.as_deref(), Some("2026-01-01"));
        assert_eq!(filter.rating_min, Some(3));
        assert_eq!(filter.limit, 20);
    }
}
