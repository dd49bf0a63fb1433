//! Breadth-first shortest-path search over a [`CostarGraph`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::entity::PersonId;
use crate::error::{ConfigError, DegreesResult, GraphError};
use crate::graph::CostarGraph;
use crate::search::config::SearchConfig;
use crate::search::frontier::Frontier;
use crate::search::node::{Node, Path};

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes whose neighbors were generated.
    pub expanded: usize,
    /// Nodes added to the frontier, including the root.
    pub enqueued: usize,
}

/// Result of [`PathFinder::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The path found, or `None` when the target is not reachable.
    pub path: Option<Path>,
    /// Work done by the search.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// True when a path was found.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.path.is_some()
    }
}

/// Finds the shortest chain of shared movies between two people.
///
/// A `PathFinder` only borrows the graph. All per-search state (frontier,
/// explored set, node chain) lives inside one call, so several threads may
/// search the same graph at once.
///
/// # Examples
///
/// ```
/// use degrees::{GraphStoreBuilder, Movie, MovieId, PathFinder, Person, PersonId};
///
/// let mut b = GraphStoreBuilder::new();
/// b.add_person(Person::new("a", "A"))
///     .add_person(Person::new("b", "B"))
///     .add_person(Person::new("c", "C"))
///     .add_movie(Movie::new("m1", "M1"))
///     .add_movie(Movie::new("m2", "M2"));
/// for (p, m) in [("a", "m1"), ("b", "m1"), ("b", "m2"), ("c", "m2")] {
///     b.link(&PersonId::new(p), &MovieId::new(m));
/// }
/// let graph = b.build();
///
/// let path = PathFinder::new(&graph)
///     .shortest_path(&PersonId::new("a"), &PersonId::new("c"))
///     .unwrap()
///     .expect("connected");
/// assert_eq!(path.degrees(), 2);
/// ```
#[derive(Debug)]
pub struct PathFinder<'g, G: CostarGraph + ?Sized> {
    graph: &'g G,
    config: SearchConfig,
}

impl<'g, G: CostarGraph + ?Sized> PathFinder<'g, G> {
    /// Breadth-first finder with the default configuration.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            config: SearchConfig::default(),
        }
    }

    /// Finder with an explicit configuration.
    ///
    /// # Errors
    /// - `InvalidMaxDegrees`, `DepthLimitRequiresQueue`: see
    ///   [`SearchConfig::validate`]
    pub fn with_config(graph: &'g G, config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            graph,
            config: config.validate()?,
        })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest path from `source` to `target`, or `None` if they are not
    /// connected.
    ///
    /// # Errors
    /// - `UnknownPerson`: if either endpoint is not in the graph
    pub fn shortest_path(&self, source: &PersonId, target: &PersonId) -> DegreesResult<Option<Path>> {
        self.search(source, target).map(|outcome| outcome.path)
    }

    /// Like [`shortest_path`](Self::shortest_path), also reporting counters.
    ///
    /// # Errors
    /// - `UnknownPerson`: if either endpoint is not in the graph
    pub fn search(&self, source: &PersonId, target: &PersonId) -> DegreesResult<SearchOutcome> {
        for id in [source, target] {
            if !self.graph.contains_person(id) {
                return Err(GraphError::UnknownPerson(id.clone()).into());
            }
        }

        let mut stats = SearchStats::default();
        if source == target {
            return Ok(SearchOutcome {
                path: Some(Path::empty()),
                stats,
            });
        }

        debug!(%source, %target, policy = ?self.config.policy, "search started");

        let mut frontier = Frontier::new(self.config.policy);
        frontier.add(Node::root(source.clone()));
        stats.enqueued += 1;
        let mut explored: HashSet<PersonId> = HashSet::new();

        let path = loop {
            if frontier.is_empty() {
                break None;
            }
            let node = frontier.remove()?;
            if node.state() == target {
                break Some(node.path());
            }

            debug_assert!(!frontier.contains_state(node.state()), "state queued twice");
            let newly_explored = explored.insert(node.state().clone());
            debug_assert!(newly_explored, "state expanded twice");

            if self.config.max_degrees.is_some_and(|max| node.depth() >= max) {
                continue;
            }

            let neighbors = self.graph.neighbors(node.state())?;
            stats.expanded += 1;
            trace!(state = %node.state(), depth = node.depth(), fanout = neighbors.len(), "expanding");

            let mut found = None;
            for neighbor in neighbors {
                if self.config.early_goal_check && &neighbor.person == target {
                    found = Some(Node::child(&node, neighbor.person, neighbor.movie).path());
                    break;
                }
                if !explored.contains(&neighbor.person) && !frontier.contains_state(&neighbor.person) {
                    frontier.add(Node::child(&node, neighbor.person, neighbor.movie));
                    stats.enqueued += 1;
                }
            }
            if found.is_some() {
                break found;
            }
        };

        debug!(
            %source,
            %target,
            degrees = path.as_ref().map(Path::degrees),
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            "search finished"
        );
        Ok(SearchOutcome { path, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Movie, MovieId, Person};
    use crate::graph::{GraphStore, GraphStoreBuilder};
    use crate::search::frontier::FrontierPolicy;
    use crate::search::node::Step;

    fn graph(people: &[&str], links: &[(&str, &str)]) -> GraphStore {
        let mut b = GraphStoreBuilder::new();
        for p in people {
            b.add_person(Person::new(*p, p.to_uppercase()));
        }
        for (_, m) in links {
            b.add_movie(Movie::new(*m, m.to_uppercase()));
        }
        for (p, m) in links {
            assert!(b.link(&PersonId::new(*p), &MovieId::new(*m)));
        }
        b.build()
    }

    fn pid(s: &str) -> PersonId {
        PersonId::new(s)
    }

    #[test]
    fn test_two_hop_chain() {
        let g = graph(&["a", "b", "c"], &[("a", "m1"), ("b", "m1"), ("b", "m2"), ("c", "m2")]);
        let path = PathFinder::new(&g).shortest_path(&pid("a"), &pid("c")).unwrap().unwrap();
        assert_eq!(path.into_steps(), vec![Step::new("m1", "b"), Step::new("m2", "c")]);
    }

    #[test]
    fn test_same_person_is_zero_degrees_without_exploring() {
        let g = graph(&["a", "b"], &[("a", "m1"), ("b", "m1")]);
        let outcome = PathFinder::new(&g).search(&pid("a"), &pid("a")).unwrap();
        assert_eq!(outcome.path, Some(Path::empty()));
        assert_eq!(outcome.stats, SearchStats::default());
    }

    #[test]
    fn test_disconnected_is_none() {
        let g = graph(&["a", "b", "d"], &[("a", "m1"), ("b", "m1")]);
        let outcome = PathFinder::new(&g).search(&pid("a"), &pid("d")).unwrap();
        assert!(!outcome.is_connected());
        assert_eq!(outcome.stats.expanded, 2);
    }

    #[test]
    fn test_unknown_endpoints_error() {
        let g = graph(&["a"], &[]);
        let finder = PathFinder::new(&g);
        let err = finder.shortest_path(&pid("a"), &pid("zz")).unwrap_err();
        assert!(err.is_not_found());
        let err = finder.shortest_path(&pid("zz"), &pid("a")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_tie_break_follows_movie_then_person_order() {
        // a reaches d through b (m1/m3) or c (m2/m4); m1 sorts first
        let g = graph(
            &["a", "b", "c", "d"],
            &[
                ("a", "m2"),
                ("c", "m2"),
                ("a", "m1"),
                ("b", "m1"),
                ("b", "m3"),
                ("d", "m3"),
                ("c", "m4"),
                ("d", "m4"),
            ],
        );
        let path = PathFinder::new(&g).shortest_path(&pid("a"), &pid("d")).unwrap().unwrap();
        assert_eq!(path.into_steps(), vec![Step::new("m1", "b"), Step::new("m3", "d")]);
    }

    #[test]
    fn test_late_goal_check_finds_same_length() {
        let g = graph(
            &["a", "b", "c", "d"],
            &[("a", "m1"), ("b", "m1"), ("b", "m2"), ("c", "m2"), ("c", "m3"), ("d", "m3")],
        );
        let early = PathFinder::new(&g).search(&pid("a"), &pid("d")).unwrap();
        let late = PathFinder::with_config(&g, SearchConfig::default().with_early_goal_check(false))
            .unwrap()
            .search(&pid("a"), &pid("d"))
            .unwrap();
        assert_eq!(early.path.as_ref().map(Path::degrees), Some(3));
        assert_eq!(late.path.as_ref().map(Path::degrees), Some(3));
        // the late check enqueues the target before finding it
        assert_eq!(late.stats.enqueued, early.stats.enqueued + 1);
    }

    #[test]
    fn test_each_state_enqueued_at_most_once() {
        // everyone shares two movies, so every expansion sees every person twice
        let people = ["a", "b", "c", "d", "e"];
        let mut links = Vec::new();
        for p in people {
            links.push((p, "m1"));
            links.push((p, "m2"));
        }
        let mut b = GraphStoreBuilder::new();
        for p in people {
            b.add_person(Person::new(p, p));
        }
        b.add_person(Person::new("z", "z"));
        b.add_movie(Movie::new("m1", "M1")).add_movie(Movie::new("m2", "M2"));
        for (p, m) in &links {
            b.link(&pid(p), &MovieId::new(*m));
        }
        let g = b.build();

        let outcome = PathFinder::new(&g).search(&pid("a"), &pid("z")).unwrap();
        assert!(outcome.path.is_none());
        assert_eq!(outcome.stats.enqueued, 5);
        assert_eq!(outcome.stats.expanded, 5);
    }

    #[test]
    fn test_max_degrees_bounds_search() {
        let g = graph(
            &["a", "b", "c", "d"],
            &[("a", "m1"), ("b", "m1"), ("b", "m2"), ("c", "m2"), ("c", "m3"), ("d", "m3")],
        );
        let bounded = PathFinder::with_config(&g, SearchConfig::default().with_max_degrees(2)).unwrap();
        assert!(bounded.shortest_path(&pid("a"), &pid("d")).unwrap().is_none());
        assert_eq!(
            bounded.shortest_path(&pid("a"), &pid("c")).unwrap().map(|p| p.degrees()),
            Some(2)
        );

        let exact = PathFinder::with_config(&g, SearchConfig::default().with_max_degrees(3)).unwrap();
        assert_eq!(
            exact.shortest_path(&pid("a"), &pid("d")).unwrap().map(|p| p.degrees()),
            Some(3)
        );
    }

    #[test]
    fn test_depth_limit_with_long_first_route() {
        // s-b-c-x-t is found first depth-first; s-a-x-t is the 3-hop route
        let g = graph(
            &["s", "a", "b", "c", "x", "t"],
            &[
                ("s", "m_a"),
                ("a", "m_a"),
                ("s", "m_b"),
                ("b", "m_b"),
                ("b", "m_bc"),
                ("c", "m_bc"),
                ("c", "m_cx"),
                ("x", "m_cx"),
                ("a", "m_ax"),
                ("x", "m_ax"),
                ("x", "m_xt"),
                ("t", "m_xt"),
            ],
        );

        let unbounded = PathFinder::with_config(&g, SearchConfig::depth_first()).unwrap();
        assert_eq!(
            unbounded.shortest_path(&pid("s"), &pid("t")).unwrap().map(|p| p.degrees()),
            Some(4)
        );

        assert!(matches!(
            PathFinder::with_config(&g, SearchConfig::depth_first().with_max_degrees(3)),
            Err(ConfigError::DepthLimitRequiresQueue)
        ));

        let bounded = PathFinder::with_config(&g, SearchConfig::default().with_max_degrees(3)).unwrap();
        let path = bounded.shortest_path(&pid("s"), &pid("t")).unwrap().unwrap();
        assert_eq!(
            path.into_steps(),
            vec![Step::new("m_a", "a"), Step::new("m_ax", "x"), Step::new("m_xt", "t")]
        );
    }

    #[test]
    fn test_with_config_validates() {
        let g = graph(&["a"], &[]);
        assert!(PathFinder::with_config(&g, SearchConfig::default().with_max_degrees(0)).is_err());
        let finder = PathFinder::with_config(&g, SearchConfig::depth_first()).unwrap();
        assert_eq!(finder.config().policy, FrontierPolicy::Stack);
    }

    #[test]
    fn test_works_through_trait_object() {
        let g = graph(&["a", "b"], &[("a", "m1"), ("b", "m1")]);
        let dyn_graph: &dyn CostarGraph = &g;
        let path = PathFinder::new(dyn_graph).shortest_path(&pid("b"), &pid("a")).unwrap().unwrap();
        assert_eq!(path.into_steps(), vec![Step::new("m1", "a")]);
    }
}
