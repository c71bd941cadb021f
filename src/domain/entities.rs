//! Domain entities: core data structures
//!
//! The dataset is a fixed three-level tree: countries own people, people own animals.
//! Field order matters for serialization: `name` comes first, then the child list.

use serde::{Deserialize, Serialize};

/// Leaf entity. Its `name` is the only field matched against a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-sensitive substring test. An empty pattern matches every animal.
    pub fn matches(&self, pattern: &str) -> bool {
        self.name.contains(pattern)
    }
}

/// A person and the animals they own, in original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub animals: Vec<Animal>,
}

impl Person {
    pub fn new(name: impl Into<String>, animals: Vec<Animal>) -> Self {
        Self {
            name: name.into(),
            animals,
        }
    }
}

/// A country and its people, in original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub people: Vec<Person>,
}

impl Country {
    pub fn new(name: impl Into<String>, people: Vec<Person>) -> Self {
        Self {
            name: name.into(),
            people,
        }
    }
}
