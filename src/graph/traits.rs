//! Read-only graph contract used by the search.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{MovieId, PersonId};
use crate::error::GraphError;

/// One hop out of a person: the movie shared and the person reached.
///
/// Ordering is by movie id, then person id. Searches expand neighbors in this
/// order, which fixes the tie-break among equally short paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    /// Movie shared with the person being expanded.
    pub movie: MovieId,
    /// Costar reached through `movie`.
    pub person: PersonId,
}

impl Neighbor {
    /// Creates a neighbor pair.
    #[must_use]
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Storage trait for costar adjacency.
///
/// Implementations must be immutable for as long as they are shared, so that
/// concurrent searches can read them without locking.
pub trait CostarGraph: Send + Sync {
    /// Returns true if the person was loaded.
    fn contains_person(&self, id: &PersonId) -> bool;

    /// Every `(movie, costar)` pair reachable from `id` in one hop.
    ///
    /// The person's own id appears once per movie, since they are a star of
    /// their own movies. Callers filter it out through their visited
    /// bookkeeping.
    ///
    /// # Errors
    /// - `UnknownPerson`: if `id` was never loaded
    fn neighbors(&self, id: &PersonId) -> Result<BTreeSet<Neighbor>, GraphError>;
}
