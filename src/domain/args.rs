//! Command line validation
//!
//! The invocation grammar has exactly one shape: the leading entries
//! (program name, and for the legacy contract a script path) followed by a
//! single `--filter=<pattern>` option with a non-empty pattern.

use crate::domain::error::{DomainError, DomainResult};

/// Literal prefix of the only recognized option.
pub const FILTER_PREFIX: &str = "--filter=";

/// Leading entries before the user arguments in the legacy argument list
/// (interpreter and script path).
pub const LEADING_ARGS: usize = 2;

/// A validated `--filter=<pattern>` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pattern: String,
}

impl FilterOption {
    /// Parse a single option string. The pattern must be non-empty.
    pub fn parse(arg: &str) -> DomainResult<Self> {
        match arg.strip_prefix(FILTER_PREFIX) {
            Some(pattern) if !pattern.is_empty() => Ok(Self {
                pattern: pattern.to_string(),
            }),
            _ => Err(DomainError::MalformedOption(arg.to_string())),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn into_pattern(self) -> String {
        self.pattern
    }
}

/// Validate a legacy argument list: `[interpreter, script, --filter=<pattern>]`.
pub fn validate_args<S: AsRef<str>>(args: &[S]) -> DomainResult<FilterOption> {
    validate_args_with(args, LEADING_ARGS)
}

/// Validate an argument list with `leading` conventional entries before the option.
///
/// Exactly `leading + 1` entries are accepted, the last one being the filter option.
pub fn validate_args_with<S: AsRef<str>>(args: &[S], leading: usize) -> DomainResult<FilterOption> {
    let expected = leading + 1;
    if args.len() != expected {
        return Err(DomainError::ArgumentCount {
            expected,
            actual: args.len(),
        });
    }
    FilterOption::parse(args[leading].as_ref())
}

/// Boolean view of [`validate_args`]. Prints nothing.
pub fn is_valid<S: AsRef<str>>(args: &[S]) -> bool {
    validate_args(args).is_ok()
}
