//! Tests for the full command: validate, load, filter, print

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use animal_search::application::ApplicationError;
use animal_search::cli::{execute, execute_with, CliError, Outcome};
use animal_search::config::Settings;
use animal_search::domain::LEADING_ARGS;
use animal_search::exitcode;
use animal_search::infrastructure::{InfraError, ServiceContainer};
use animal_search::util::testing;
use common::{dillauti, MemoryFileSystem, IDNA_MATCH_JSON};

const DATA_FILE: &str = "/data/countries.json";

fn container_with_dataset(content: &str) -> ServiceContainer {
    testing::init_test_setup();
    let settings = Settings {
        data_file: Some(PathBuf::from(DATA_FILE)),
        ..Settings::default()
    };
    let fs = MemoryFileSystem::default().with_file(DATA_FILE, content);
    ServiceContainer::with_deps(settings, Arc::new(fs))
}

fn dillauti_json() -> String {
    serde_json::to_string(&dillauti()).unwrap()
}

#[test]
fn given_invalid_command_line_when_running_then_does_not_touch_dataset() {
    // Arrange: data file configured but absent, loading it would fail
    let settings = Settings {
        data_file: Some(PathBuf::from("/nowhere.json")),
        ..Settings::default()
    };
    let container = ServiceContainer::with_deps(settings, Arc::new(MemoryFileSystem::default()));
    let mut out = Vec::new();

    // Act
    let outcome =
        execute_with(&["/bin/node", "file/path"], LEADING_ARGS, &container, &mut out).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::InvalidArguments);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
}

#[test]
fn given_match_when_running_then_prints_one_json_block() {
    let container = container_with_dataset(&dillauti_json());
    let mut out = Vec::new();

    let outcome = execute_with(
        &["/bin/node", "file/path", "--filter=idna"],
        LEADING_ARGS,
        &container,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::Printed);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{IDNA_MATCH_JSON}\n"));
}

#[test]
fn given_no_match_when_running_then_prints_nothing() {
    let container = container_with_dataset(&dillauti_json());
    let mut out = Vec::new();

    let outcome = execute(
        &["animal-search", "--filter=manchester united"],
        &container,
        &mut out,
    )
    .unwrap();

    assert_eq!(outcome, Outcome::NoMatch);
    assert!(out.is_empty());
}

#[test]
fn given_pattern_with_leading_hyphen_when_running_then_is_used_verbatim() {
    let dataset = r#"[{"name":"Satanwi","people":[{"name":"Anthony Bruno","animals":[{"name":"Ring-tailed Lemur"}]}]}]"#;
    let container = container_with_dataset(dataset);
    let mut out = Vec::new();

    let outcome = execute(&["animal-search", "--filter=-tailed"], &container, &mut out).unwrap();

    assert_eq!(outcome, Outcome::Printed);
    assert!(String::from_utf8(out).unwrap().contains("Ring-tailed Lemur"));
}

#[test]
fn given_no_data_file_when_running_then_searches_embedded_dataset() {
    testing::init_test_setup();
    let container =
        ServiceContainer::with_deps(Settings::default(), Arc::new(MemoryFileSystem::default()));
    let mut out = Vec::new();

    let outcome = execute(&["animal-search", "--filter=idna"], &container, &mut out).unwrap();

    assert_eq!(outcome, Outcome::Printed);
    assert_eq!(String::from_utf8(out).unwrap(), format!("{IDNA_MATCH_JSON}\n"));
}

#[test]
fn given_missing_data_file_when_running_then_fails_with_noinput() {
    let settings = Settings {
        data_file: Some(PathBuf::from("/nowhere.json")),
        ..Settings::default()
    };
    let container = ServiceContainer::with_deps(settings, Arc::new(MemoryFileSystem::default()));
    let mut out = Vec::new();

    let err = execute(&["animal-search", "--filter=idna"], &container, &mut out).unwrap_err();

    assert!(matches!(
        err,
        CliError::Infra(InfraError::Application(ApplicationError::DatasetRead { .. }))
    ));
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
    assert!(out.is_empty());
}

#[test]
fn given_malformed_dataset_when_running_then_fails_with_dataerr() {
    let container = container_with_dataset(r#"[{"name":"Dillauti"}]"#);
    let mut out = Vec::new();

    let err = execute(&["animal-search", "--filter=idna"], &container, &mut out).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[cfg(unix)]
#[test]
fn given_non_utf8_argument_when_running_then_prints_diagnostics() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    // Arrange
    let container = container_with_dataset(&dillauti_json());
    let args = vec![
        OsString::from("animal-search"),
        OsString::from_vec(b"--filter=\xff".to_vec()),
    ];
    let mut out = Vec::new();

    // Act
    let outcome = execute(&args, &container, &mut out).unwrap();

    // Assert
    assert_eq!(outcome, Outcome::InvalidArguments);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Invalid command line\nUsage: node app.js --filter=my-pattern\n"
    );
}
