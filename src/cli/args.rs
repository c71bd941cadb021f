//! CLI argument definitions using clap
//!
//! The grammar has exactly one shape: `--filter=<pattern>`. Help and version
//! flags are disabled so that anything else is an invalid command line.

use clap::Parser;

use crate::domain::{DomainResult, FilterOption, FILTER_PREFIX};

/// Filter a countries/people/animals dataset by animal name
#[derive(Parser, Debug)]
#[command(name = "animal-search")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Case-sensitive substring matched against animal names
    #[arg(
        long,
        value_name = "PATTERN",
        require_equals = true,
        allow_hyphen_values = true,
        value_parser = parse_filter
    )]
    pub filter: FilterOption,
}

/// Apply the domain rule to the value after `--filter=`.
fn parse_filter(value: &str) -> DomainResult<FilterOption> {
    FilterOption::parse(&format!("{FILTER_PREFIX}{value}"))
}
