//! Frontier-based path search.
//!
//! - [`Node`]: parent-linked search state
//! - [`Frontier`]: stack or queue of nodes awaiting expansion
//! - [`PathFinder`]: the breadth-first search loop

mod config;
mod finder;
mod frontier;
mod node;

pub use config::SearchConfig;
pub use finder::{PathFinder, SearchOutcome, SearchStats};
pub use frontier::{Frontier, FrontierPolicy};
pub use node::{Node, Path, Step};
