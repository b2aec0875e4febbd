//! Record types for people, movies and their identifiers.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

/// Identifier of a person, compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        PersonId(id.to_string())
    }
}

/// Identifier of a movie, compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        MovieId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
    pub movies: BTreeSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<String>,
    pub stars: BTreeSet<PersonId>,
}

/// One of several people sharing a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
}

impl From<&Person> for Candidate {
    fn from(person: &Person) -> Self {
        Candidate {
            id: person.id.clone(),
            name: person.name.clone(),
            birth: person.birth.clone(),
        }
    }
}

/// Turns an empty CSV cell into `None`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
