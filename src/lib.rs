//! # degrees - Degrees of separation
//!
//! Finds the shortest chain of shared movies connecting two people in a
//! person/movie costar graph.
//!
//! ## Core Concepts
//!
//! - **GraphStore**: immutable person/movie adjacency, built once
//! - **NameResolver**: display name to person id, with disambiguation
//! - **Node / Frontier**: search state and its removal order
//! - **PathFinder**: breadth-first search returning a shortest path
//!
//! ## Usage
//!
//! ```rust,ignore
//! use degrees::{load_directory, Connection, NameResolver, PathFinder, Resolution};
//!
//! let graph = load_directory("small")?;
//! let names = NameResolver::from_graph(&graph);
//! let Resolution::Unique(source) = names.resolve("Kevin Bacon")? else { todo!() };
//! let Resolution::Unique(target) = names.resolve("Tom Hanks")? else { todo!() };
//!
//! match PathFinder::new(&graph).shortest_path(&source, &target)? {
//!     Some(path) => println!("{} degrees", path.degrees()),
//!     None => println!("Not connected."),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod entity;
pub mod error;
pub mod graph;
pub mod report;
pub mod resolver;
pub mod search;
pub mod telemetry;

// Re-export primary types at crate root for convenience
pub use entity::{Movie, MovieId, Person, PersonId};
pub use error::{
    ConfigError, DegreesError, DegreesResult, FrontierError, GraphError, LoadError, ResolveError,
};
pub use graph::{load_directory, load_readers, CostarGraph, GraphStore, GraphStoreBuilder, Neighbor};
pub use report::{Connection, Hop};
pub use resolver::{Candidate, Candidates, NameResolver, Resolution};
pub use search::{
    Frontier, FrontierPolicy, Node, Path, PathFinder, SearchConfig, SearchOutcome, SearchStats, Step,
};
