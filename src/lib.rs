//! animal-search: prune a countries/people/animals tree to the animals whose
//! name contains a pattern.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{is_valid, search, validate_args, Animal, Country, FilterOption, Person};
