//! Parent-linked search nodes and the paths read back from them.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::entity::{MovieId, PersonId};
use crate::graph::Neighbor;

/// A visited person together with how the search reached them.
///
/// Nodes are shared through `Rc`: a node stays alive while the frontier holds
/// it or while any child points at it as parent. The parent chain is a tree
/// rooted at the search source and is never mutated after creation.
#[derive(Debug)]
pub struct Node {
    state: PersonId,
    parent: Option<Rc<Node>>,
    action: Option<MovieId>,
    depth: usize,
}

impl Node {
    /// The search source: no parent, no action.
    #[must_use]
    pub fn root(state: PersonId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            action: None,
            depth: 0,
        })
    }

    /// A node reached from `parent` through `action`.
    #[must_use]
    pub fn child(parent: &Rc<Self>, state: PersonId, action: MovieId) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            depth: parent.depth + 1,
        })
    }

    /// Person this node stands for.
    #[must_use]
    pub fn state(&self) -> &PersonId {
        &self.state
    }

    /// `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Movie that led here from the parent. `None` for the root.
    #[must_use]
    pub fn action(&self) -> Option<&MovieId> {
        self.action.as_ref()
    }

    /// Number of hops from the root.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Walk back to the root and return the hops in root-to-here order.
    #[must_use]
    pub fn path(&self) -> Path {
        let mut steps = Vec::with_capacity(self.depth);
        let mut current = self;
        while let (Some(parent), Some(action)) = (current.parent.as_deref(), current.action.as_ref()) {
            steps.push(Step {
                movie: action.clone(),
                person: current.state.clone(),
            });
            current = parent;
        }
        steps.reverse();
        Path { steps }
    }
}

/// One hop of a path: the movie shared and the person it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Movie shared with the previous person.
    pub movie: MovieId,
    /// Person reached.
    pub person: PersonId,
}

impl Step {
    /// Creates a hop.
    #[must_use]
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

impl From<Neighbor> for Step {
    fn from(n: Neighbor) -> Self {
        Self {
            movie: n.movie,
            person: n.person,
        }
    }
}

/// Ordered hops from a source person to a target person.
///
/// The source itself is not a step, so a person's path to themselves is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// The zero-hop path.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Degrees of separation.
    #[must_use]
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    /// True for the zero-hop path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hops in source-to-target order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The person the path ends at, if it has any hops.
    #[must_use]
    pub fn last_person(&self) -> Option<&PersonId> {
        self.steps.last().map(|s| &s.person)
    }

    /// Consumes the path, returning its hops.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
