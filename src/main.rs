use std::ffi::OsString;
use std::io;

use animal_search::cli::{execute, output, settings_for, Outcome};
use animal_search::config::Settings;
use animal_search::exitcode;
use animal_search::infrastructure::ServiceContainer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    let args: Vec<OsString> = std::env::args_os().collect();

    let settings = match settings_for(&args, Settings::load(None)) {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e);
            std::process::exit(e.exit_code());
        }
    };

    setup_logging(&settings.log_level);

    let container = ServiceContainer::new(settings);
    let mut stdout = io::stdout().lock();
    let result = execute(&args, &container, &mut stdout);
    drop(stdout);

    match result {
        Ok(Outcome::InvalidArguments) => std::process::exit(exitcode::USAGE),
        Ok(Outcome::Printed | Outcome::NoMatch) => {}
        Err(e) => {
            output::error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; stdout carries results only.
fn setup_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::debug!("logging initialized");
}
