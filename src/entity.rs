//! Person and movie records and their identifiers.
//!
//! Records are created once while the graph is loaded and never change
//! afterwards. Identifiers are opaque strings taken verbatim from the source
//! data; their string ordering is the canonical ordering used wherever the
//! crate needs a reproducible iteration order.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a person.
///
/// # Examples
///
/// ```
/// use degrees::PersonId;
///
/// let id = PersonId::new("102");
/// assert_eq!(id.as_str(), "102");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Creates a person id from its raw string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Stable identifier of a movie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a movie id from its raw string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A person in the costar graph.
///
/// `movies` is filled in by the graph builder; a freshly constructed person
/// starts with no movies.
///
/// # Examples
///
/// ```
/// use degrees::Person;
///
/// let person = Person::new("102", "Kevin Bacon").with_birth(1958);
/// assert_eq!(person.birth, Some(1958));
/// assert!(person.movies.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Display name, not unique.
    pub name: String,

    /// Birth year, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<u16>,

    /// Movies this person starred in.
    #[serde(default)]
    pub movies: BTreeSet<MovieId>,
}

impl Person {
    /// Creates a person without a known birth year.
    #[must_use]
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth: None,
            movies: BTreeSet::new(),
        }
    }

    /// Sets the birth year.
    #[must_use]
    pub fn with_birth(mut self, birth: u16) -> Self {
        self.birth = Some(birth);
        self
    }
}

/// A movie in the costar graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier
    pub id: MovieId,

    /// Display title.
    pub title: String,

    /// Release year, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// People who starred in this movie.
    #[serde(default)]
    pub stars: BTreeSet<PersonId>,
}

impl Movie {
    /// Creates a movie without a known release year.
    #[must_use]
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: None,
            stars: BTreeSet::new(),
        }
    }

    /// Sets the release year.
    #[must_use]
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}
