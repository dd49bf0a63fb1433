//! Frontier containers with a pluggable removal order.
//!
//! Only [`FrontierPolicy::Queue`] gives breadth-first order, and only
//! breadth-first order guarantees the first path found to the target is a
//! shortest one in an unweighted graph. [`FrontierPolicy::Stack`] searches
//! depth-first and finds some path.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::entity::PersonId;
use crate::error::FrontierError;
use crate::search::node::Node;

/// Removal order of a [`Frontier`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierPolicy {
    /// Last in, first out (depth-first).
    Stack,
    /// First in, first out (breadth-first).
    #[default]
    Queue,
}

/// Nodes waiting to be expanded.
#[derive(Debug)]
pub struct Frontier {
    policy: FrontierPolicy,
    nodes: VecDeque<Rc<Node>>,
    // node count per state, for constant-time contains_state
    states: HashMap<PersonId, usize>,
}

impl Frontier {
    /// Empty frontier with the given removal order.
    #[must_use]
    pub fn new(policy: FrontierPolicy) -> Self {
        Self {
            policy,
            nodes: VecDeque::new(),
            states: HashMap::new(),
        }
    }

    /// A LIFO frontier.
    #[must_use]
    pub fn stack() -> Self {
        Self::new(FrontierPolicy::Stack)
    }

    /// A FIFO frontier.
    #[must_use]
    pub fn queue() -> Self {
        Self::new(FrontierPolicy::Queue)
    }

    /// Removal order.
    #[must_use]
    pub const fn policy(&self) -> FrontierPolicy {
        self.policy
    }

    /// Adds a node. The caller keeps each state in the frontier at most once.
    pub fn add(&mut self, node: Rc<Node>) {
        *self.states.entry(node.state().clone()).or_insert(0) += 1;
        self.nodes.push_back(node);
    }

    /// True when no node is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of queued nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True iff some node currently held has this state.
    #[must_use]
    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains_key(state)
    }

    /// Take the next node according to the policy.
    ///
    /// # Errors
    /// - `EmptyFrontierRemoval`: if the frontier is empty. Callers check
    ///   [`is_empty`](Self::is_empty) first; hitting this is a caller bug.
    pub fn remove(&mut self) -> Result<Rc<Node>, FrontierError> {
        let node = match self.policy {
            FrontierPolicy::Stack => self.nodes.pop_back(),
            FrontierPolicy::Queue => self.nodes.pop_front(),
        }
        .ok_or(FrontierError::EmptyFrontierRemoval)?;

        if let Some(count) = self.states.get_mut(node.state()) {
            *count -= 1;
            if *count == 0 {
                self.states.remove(node.state());
            }
        }
        Ok(node)
    }
}
