//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod args;
pub mod entities;
pub mod error;
pub mod filter;

pub use args::{is_valid, validate_args, validate_args_with, FilterOption, FILTER_PREFIX, LEADING_ARGS};
pub use entities::*;
pub use error::{DomainError, DomainResult};
pub use filter::search;
