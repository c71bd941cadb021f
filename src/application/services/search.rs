//! Search service
//!
//! Loads the dataset, runs the hierarchical filter and renders matches as
//! indented JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{self, Country};
use crate::infrastructure::traits::FileSystem;

/// Dataset compiled into the binary, used when no data file is configured.
pub const EMBEDDED_DATASET: &str = include_str!("../../../data/countries.json");

/// Where the countries dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    pub fn from_settings(settings: &Settings) -> Self {
        match &settings.data_file {
            Some(path) => Self::File(path.clone()),
            None => Self::Embedded,
        }
    }
}

/// Service composing dataset loading, filtering and rendering.
pub struct SearchService {
    fs: Arc<dyn FileSystem>,
    indent: usize,
}

impl SearchService {
    /// Create a new search service rendering with `indent` spaces per level.
    pub fn new(fs: Arc<dyn FileSystem>, indent: usize) -> Self {
        Self { fs, indent }
    }

    /// Load and parse the dataset.
    pub fn load_dataset(&self, source: &DatasetSource) -> ApplicationResult<Vec<Country>> {
        match source {
            DatasetSource::Embedded => parse_dataset(EMBEDDED_DATASET, "embedded dataset"),
            DatasetSource::File(path) => self.load_file(path),
        }
    }

    fn load_file(&self, path: &Path) -> ApplicationResult<Vec<Country>> {
        debug!("load_file: path={}", path.display());
        let content = self.fs.read_to_string(path).with_dataset_path(path)?;
        parse_dataset(&content, &path.display().to_string())
    }

    /// Filter `countries` and render the result.
    ///
    /// Returns `Ok(None)` when nothing matched, so callers can stay silent.
    #[instrument(level = "debug", skip(self, countries))]
    pub fn run(&self, countries: &[Country], pattern: &str) -> ApplicationResult<Option<String>> {
        match domain::search(countries, pattern) {
            Some(matched) => self.render(&matched).map(Some),
            None => {
                debug!("run: no match for {:?}", pattern);
                Ok(None)
            }
        }
    }

    /// Serialize countries as JSON indented with `indent` spaces per level.
    pub fn render(&self, countries: &[Country]) -> ApplicationResult<String> {
        let indent = vec![b' '; self.indent];
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        countries
            .serialize(&mut ser)
            .map_err(ApplicationError::Render)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn parse_dataset(content: &str, origin: &str) -> ApplicationResult<Vec<Country>> {
    let countries: Vec<Country> =
        serde_json::from_str(content).map_err(|source| ApplicationError::DatasetParse {
            origin: origin.to_string(),
            source,
        })?;
    debug!("parse_dataset: {} countries from {}", countries.len(), origin);
    Ok(countries)
}
