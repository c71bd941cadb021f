//! Hierarchical filter over the countries/people/animals tree

use tracing::{debug, instrument};

use crate::domain::entities::{Animal, Country, Person};

/// Prune the dataset down to animals whose name contains `pattern`.
///
/// People without a matching animal are dropped, as are countries without a
/// remaining person. Order is preserved at every level and the input is never
/// modified.
///
/// Returns `None` when nothing matched. A present result never contains an
/// empty `people` or `animals` list, and is never itself empty.
#[instrument(level = "debug", skip(countries), fields(count = countries.len()))]
pub fn search(countries: &[Country], pattern: &str) -> Option<Vec<Country>> {
    let matched: Vec<Country> = countries
        .iter()
        .filter_map(|country| filter_country(country, pattern))
        .collect();

    debug!("search: {} matching countries", matched.len());
    if matched.is_empty() {
        None
    } else {
        Some(matched)
    }
}

fn filter_country(country: &Country, pattern: &str) -> Option<Country> {
    let people: Vec<Person> = country
        .people
        .iter()
        .filter_map(|person| filter_person(person, pattern))
        .collect();

    (!people.is_empty()).then(|| Country {
        name: country.name.clone(),
        people,
    })
}

fn filter_person(person: &Person, pattern: &str) -> Option<Person> {
    let animals: Vec<Animal> = person
        .animals
        .iter()
        .filter(|animal| animal.matches(pattern))
        .cloned()
        .collect();

    (!animals.is_empty()).then(|| Person {
        name: person.name.clone(),
        animals,
    })
}
