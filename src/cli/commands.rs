//! Command dispatch: parse, load, filter, print

use std::ffi::{OsStr, OsString};
use std::io::Write;

use clap::Parser;
use tracing::{debug, info};

use crate::application::ApplicationResult;
use crate::cli::args::Cli;
use crate::cli::diagnostics::print_usage;
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::infrastructure::{InfraError, ServiceContainer};

/// Leading entries of a native argv: only the program name.
pub const NATIVE_LEADING_ARGS: usize = 1;

/// What a successful run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Matches were written.
    Printed,
    /// Valid arguments, nothing matched; nothing was written.
    NoMatch,
    /// Diagnostics were written; no filtering happened.
    InvalidArguments,
}

/// Run with a native argv (`[program, --filter=<pattern>]`).
pub fn execute<I, T, W>(args: I, container: &ServiceContainer, out: &mut W) -> CliResult<Outcome>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
    W: Write + ?Sized,
{
    execute_with(args, NATIVE_LEADING_ARGS, container, out)
}

/// Run with `leading` conventional entries before the filter option.
///
/// Invalid arguments, including entries that are not valid UTF-8, are an
/// expected outcome: the two diagnostic lines are written to `out` and
/// nothing else happens. Without a match nothing is written at all.
pub fn execute_with<I, T, W>(
    args: I,
    leading: usize,
    container: &ServiceContainer,
    out: &mut W,
) -> CliResult<Outcome>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
    W: Write + ?Sized,
{
    match parse_command_line(args, leading) {
        Ok(cli) => _filter(&cli, container, out),
        Err(e) => {
            info!("invalid command line: {}", e.kind());
            print_usage(out, &container.settings.usage_program)
                .map_err(|e| InfraError::io("write diagnostics", e))?;
            Ok(Outcome::InvalidArguments)
        }
    }
}

/// True when a native argv has the one accepted shape.
pub fn is_valid_command_line<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    parse_command_line(args, NATIVE_LEADING_ARGS).is_ok()
}

/// Settings to run with, given the outcome of loading them.
///
/// A broken configuration does not hide the diagnostics of an invalid
/// command line: that case falls back to the defaults.
pub fn settings_for<I, T>(args: I, loaded: ApplicationResult<Settings>) -> CliResult<Settings>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    let e = match loaded {
        Ok(settings) => return Ok(settings),
        Err(e) => e,
    };
    if is_valid_command_line(args) {
        return Err(e.into());
    }
    debug!("ignoring config error on invalid command line: {}", e);
    Ok(Settings::default())
}

/// Replace the `leading` entries with the program name and let clap parse the rest.
fn parse_command_line<I, T>(args: I, leading: usize) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    let argv = std::iter::once(OsString::from(env!("CARGO_PKG_NAME")))
        .chain(args.into_iter().skip(leading).map(|a| a.as_ref().to_os_string()));
    Cli::try_parse_from(argv)
}

fn _filter<W: Write + ?Sized>(
    cli: &Cli,
    container: &ServiceContainer,
    out: &mut W,
) -> CliResult<Outcome> {
    let pattern = cli.filter.pattern();
    debug!("pattern: {:?}", pattern);

    let source = container.dataset_source();
    debug!("dataset source: {:?}", source);
    let countries = container.search.load_dataset(&source)?;

    match container.search.run(&countries, pattern)? {
        Some(rendered) => {
            writeln!(out, "{rendered}").map_err(|e| InfraError::io("write result", e))?;
            Ok(Outcome::Printed)
        }
        None => Ok(Outcome::NoMatch),
    }
}
