//! Error conversion helpers for dataset I/O
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Attach the dataset path to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&path).with_dataset_path(&path)?;
    /// ```
    fn with_dataset_path(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_dataset_path(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })
    }
}
