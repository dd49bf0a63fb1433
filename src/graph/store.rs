//! In-memory costar graph.
//!
//! The builder is the only place adjacency is written. Every applied link
//! updates both the person's movie set and the movie's star set, so the
//! frozen [`GraphStore`] is symmetric by construction.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::entity::{Movie, MovieId, Person, PersonId};
use crate::error::GraphError;
use crate::graph::traits::{CostarGraph, Neighbor};

/// Mutable staging area for a [`GraphStore`].
#[derive(Debug, Default)]
pub struct GraphStoreBuilder {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    links: usize,
    skipped_links: usize,
}

impl GraphStoreBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person record.
    ///
    /// Any `movies` on the record are ignored: adjacency only comes from
    /// [`link`](Self::link). A second record with the same id replaces the
    /// name and birth year but keeps the links already made.
    pub fn add_person(&mut self, mut person: Person) -> &mut Self {
        match self.people.entry(person.id.clone()) {
            Entry::Occupied(mut slot) => {
                warn!(person_id = %person.id, "duplicate person record, replacing");
                person.movies = std::mem::take(&mut slot.get_mut().movies);
                slot.insert(person);
            }
            Entry::Vacant(slot) => {
                person.movies.clear();
                slot.insert(person);
            }
        }
        self
    }

    /// Add a movie record. Duplicate ids behave as for [`add_person`](Self::add_person).
    pub fn add_movie(&mut self, mut movie: Movie) -> &mut Self {
        match self.movies.entry(movie.id.clone()) {
            Entry::Occupied(mut slot) => {
                warn!(movie_id = %movie.id, "duplicate movie record, replacing");
                movie.stars = std::mem::take(&mut slot.get_mut().stars);
                slot.insert(movie);
            }
            Entry::Vacant(slot) => {
                movie.stars.clear();
                slot.insert(movie);
            }
        }
        self
    }

    /// Record that `person` starred in `movie`.
    ///
    /// Returns false, and records nothing, when either id is unknown.
    pub fn link(&mut self, person: &PersonId, movie: &MovieId) -> bool {
        let (Some(p), Some(m)) = (self.people.get_mut(person), self.movies.get_mut(movie)) else {
            debug!(person_id = %person, movie_id = %movie, "skipping dangling star link");
            self.skipped_links += 1;
            return false;
        };
        p.movies.insert(movie.clone());
        m.stars.insert(person.clone());
        self.links += 1;
        true
    }

    /// Number of links rejected so far because they named an unknown id.
    #[must_use]
    pub const fn skipped_links(&self) -> usize {
        self.skipped_links
    }

    /// Freeze the builder into a read-only store.
    #[must_use]
    pub fn build(self) -> GraphStore {
        if self.skipped_links > 0 {
            warn!(skipped = self.skipped_links, "ignored star links with unknown ids");
        }
        info!(
            people = self.people.len(),
            movies = self.movies.len(),
            links = self.links,
            "graph loaded"
        );
        GraphStore {
            people: self.people,
            movies: self.movies,
        }
    }
}

/// Immutable adjacency over people and movies.
///
/// # Examples
///
/// ```
/// use degrees::{CostarGraph, GraphStore, Movie, Person, PersonId, MovieId};
///
/// let mut builder = GraphStore::builder();
/// builder
///     .add_person(Person::new("a", "Alice"))
///     .add_person(Person::new("b", "Bob"))
///     .add_movie(Movie::new("m1", "Heat"));
/// builder.link(&PersonId::new("a"), &MovieId::new("m1"));
/// builder.link(&PersonId::new("b"), &MovieId::new("m1"));
/// let graph = builder.build();
///
/// let neighbors = graph.neighbors(&PersonId::new("a")).unwrap();
/// assert_eq!(neighbors.len(), 2); // Bob, plus Alice herself
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
}

impl GraphStore {
    /// Start building a store.
    #[must_use]
    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::new()
    }

    /// Look up a person.
    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    /// Look up a movie.
    #[must_use]
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Iterate over all people in unspecified order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// Iterate over all movies in unspecified order.
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// Number of loaded people.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of loaded movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}

impl CostarGraph for GraphStore {
    fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    fn neighbors(&self, id: &PersonId) -> Result<BTreeSet<Neighbor>, GraphError> {
        let person = self
            .people
            .get(id)
            .ok_or_else(|| GraphError::UnknownPerson(id.clone()))?;

        let mut out = BTreeSet::new();
        for movie_id in &person.movies {
            let movie = self
                .movies
                .get(movie_id)
                .ok_or_else(|| GraphError::UnknownMovie(movie_id.clone()))?;
            for star in &movie.stars {
                out.insert(Neighbor {
                    movie: movie_id.clone(),
                    person: star.clone(),
                });
            }
        }
        Ok(out)
    }
}
