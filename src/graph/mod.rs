//! The immutable person/movie adjacency and its construction.
//!
//! [`GraphStoreBuilder`] indexes the costar relation in both directions;
//! [`GraphStore`] is the frozen result that searches read through the
//! [`CostarGraph`] trait. [`load_directory`] fills a builder from the
//! `people.csv` / `movies.csv` / `stars.csv` relation files.

mod loader;
mod store;
mod traits;

pub use loader::{load_directory, load_readers, MOVIES_FILE, PEOPLE_FILE, STARS_FILE};
pub use store::{GraphStore, GraphStoreBuilder};
pub use traits::{CostarGraph, Neighbor};
