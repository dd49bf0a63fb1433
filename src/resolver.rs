//! Display-name to person resolution.
//!
//! Names are not unique: two people can share one. [`NameResolver::resolve`]
//! returns the single match when there is one, and otherwise hands back the
//! ordered [`Candidates`] so the caller can pick among them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entity::PersonId;
use crate::error::ResolveError;
use crate::graph::GraphStore;

fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A person offered for disambiguation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Person id to pass back to [`Candidates::select`].
    pub id: PersonId,
    /// Name as loaded.
    pub name: String,
    /// Birth year, shown to tell namesakes apart.
    pub birth: Option<u16>,
}

/// People sharing a display name, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidates {
    name: String,
    candidates: Vec<Candidate>,
}

impl Candidates {
    /// The name as the caller wrote it.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of people sharing the name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a resolved name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Candidate ids in id order.
    pub fn ids(&self) -> impl Iterator<Item = &PersonId> {
        self.candidates.iter().map(|c| &c.id)
    }

    /// Confirm a pick.
    ///
    /// # Errors
    /// - `NameNotFound`: if `id` is not among the candidates
    pub fn select(&self, id: &PersonId) -> Result<PersonId, ResolveError> {
        self.candidates
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.id.clone())
            .ok_or_else(|| ResolveError::NameNotFound {
                name: self.name.clone(),
            })
    }
}

/// Outcome of resolving a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one person carries the name.
    Unique(PersonId),
    /// Several do; the caller must choose.
    Ambiguous(Candidates),
}

/// Case-insensitive index from display name to people.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    by_name: HashMap<String, Vec<Candidate>>,
}

impl NameResolver {
    /// Index every person in the graph.
    #[must_use]
    pub fn from_graph(graph: &GraphStore) -> Self {
        let mut by_name: HashMap<String, Vec<Candidate>> = HashMap::new();
        for person in graph.people() {
            by_name
                .entry(normalize_key(&person.name))
                .or_default()
                .push(Candidate {
                    id: person.id.clone(),
                    name: person.name.clone(),
                    birth: person.birth,
                });
        }
        for candidates in by_name.values_mut() {
            candidates.sort_by(|a, b| a.id.cmp(&b.id));
        }
        Self { by_name }
    }

    /// Resolve a display name.
    ///
    /// # Errors
    /// - `NameNotFound`: if nobody carries the name
    ///
    /// # Examples
    ///
    /// ```
    /// use degrees::{GraphStoreBuilder, NameResolver, Person, PersonId, Resolution};
    ///
    /// let mut builder = GraphStoreBuilder::new();
    /// builder.add_person(Person::new("1", "Emma Watson"));
    /// let resolver = NameResolver::from_graph(&builder.build());
    ///
    /// assert_eq!(
    ///     resolver.resolve("emma watson").unwrap(),
    ///     Resolution::Unique(PersonId::new("1"))
    /// );
    /// ```
    pub fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        match self.by_name.get(&normalize_key(name)).map(Vec::as_slice) {
            None | Some([]) => Err(ResolveError::NameNotFound {
                name: name.to_string(),
            }),
            Some([only]) => Ok(Resolution::Unique(only.id.clone())),
            Some(many) => Ok(Resolution::Ambiguous(Candidates {
                name: name.to_string(),
                candidates: many.to_vec(),
            })),
        }
    }

    /// Resolve a name, asking `choose` to pick when it is ambiguous.
    ///
    /// `choose` returns `None` to give up. Its pick is checked with
    /// [`Candidates::select`].
    ///
    /// # Errors
    /// - `NameNotFound`: if nobody carries the name, or the pick is absent or
    ///   not a candidate
    pub fn person_id_for_name<F>(&self, name: &str, choose: F) -> Result<PersonId, ResolveError>
    where
        F: FnOnce(&Candidates) -> Option<PersonId>,
    {
        match self.resolve(name)? {
            Resolution::Unique(id) => Ok(id),
            Resolution::Ambiguous(candidates) => match choose(&candidates) {
                Some(pick) => candidates.select(&pick),
                None => Err(ResolveError::NameNotFound {
                    name: name.to_string(),
                }),
            },
        }
    }

    /// Number of distinct normalized names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}
