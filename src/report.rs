//! Human-readable form of a found path.
//!
//! A [`Connection`] replaces the ids in a [`Path`] with names and titles:
//! one `(from, to, movie)` triple per hop, starting at the source.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::PersonId;
use crate::error::GraphError;
use crate::graph::GraphStore;
use crate::search::Path;

/// One hop, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Name of the person the hop starts at.
    pub from: String,
    /// Name of the person the hop reaches.
    pub to: String,
    /// Title of the movie they share.
    pub movie: String,
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {} starred in {}", self.from, self.to, self.movie)
    }
}

/// A path between two people, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Source person name.
    pub source: String,
    /// Target person name.
    pub target: String,
    /// One entry per degree, source first.
    pub hops: Vec<Hop>,
}

impl Connection {
    /// Name every hop of `path`, which must start at `source`.
    ///
    /// # Errors
    /// - `UnknownPerson` / `UnknownMovie`: if the path names an id that is not
    ///   in `graph`
    pub fn from_path(graph: &GraphStore, source: &PersonId, path: &Path) -> Result<Self, GraphError> {
        let name_of = |id: &PersonId| {
            graph
                .person(id)
                .map(|p| p.name.clone())
                .ok_or_else(|| GraphError::UnknownPerson(id.clone()))
        };

        let source_name = name_of(source)?;
        let mut hops = Vec::with_capacity(path.degrees());
        let mut from = source_name.clone();
        for step in path {
            let to = name_of(&step.person)?;
            let movie = graph
                .movie(&step.movie)
                .map(|m| m.title.clone())
                .ok_or_else(|| GraphError::UnknownMovie(step.movie.clone()))?;
            hops.push(Hop {
                from: std::mem::replace(&mut from, to.clone()),
                to,
                movie,
            });
        }

        Ok(Self {
            source: source_name,
            target: from,
            hops,
        })
    }

    /// Degrees of separation.
    #[must_use]
    pub fn degrees(&self) -> usize {
        self.hops.len()
    }
}
