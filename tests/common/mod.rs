//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use animal_search::infrastructure::traits::FileSystem;
use animal_search::{Animal, Country, Person};

/// In-memory filesystem holding a fixed set of files.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

pub fn person(name: &str, animals: &[&str]) -> Person {
    Person::new(name, animals.iter().map(|a| Animal::new(*a)).collect())
}

/// The single-country dataset used by the legacy test suite.
pub fn dillauti() -> Vec<Country> {
    vec![Country::new(
        "Dillauti",
        vec![
            person(
                "Winifred Graham",
                &["Anoa", "Duck", "Narwhal", "Badger", "Cobra", "Crow"],
            ),
            person(
                "Blanche Viciani",
                &[
                    "Barbet",
                    "Rhea",
                    "Snakes",
                    "Antelope",
                    "Echidna",
                    "Crow",
                    "Guinea Fowl",
                    "Deer Mouse",
                ],
            ),
        ],
    )]
}

/// Two countries with overlapping animal names.
pub fn two_countries() -> Vec<Country> {
    let mut countries = dillauti();
    countries.push(Country::new(
        "Tohabdal",
        vec![
            person("Effie Houghton", &["Zebra", "Crow", "Emu"]),
            person("Essie Bennett", &["Goat", "Quahog"]),
        ],
    ));
    countries
}

/// Pretty JSON of the `idna` match, as `JSON.stringify(x, null, 2)` prints it.
pub const IDNA_MATCH_JSON: &str = r#"[
  {
    "name": "Dillauti",
    "people": [
      {
        "name": "Blanche Viciani",
        "animals": [
          {
            "name": "Echidna"
          }
        ]
      }
    ]
  }
]"#;
