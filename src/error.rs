//! Error types for degrees.
//!
//! All errors are strongly typed using thiserror so callers can match on
//! the specific condition. "No path" and "ambiguous name" are ordinary
//! results, not errors: see [`crate::search::PathFinder::shortest_path`]
//! and [`crate::resolver::Resolution`].

use std::path::PathBuf;

use thiserror::Error;

use crate::entity::{MovieId, PersonId};

/// Errors raised while mapping a display name to a person.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No person carries the name, or a disambiguation pick was not one of
    /// the candidates.
    #[error("Person not found: '{name}'")]
    NameNotFound {
        /// The name as the caller gave it.
        name: String,
    },
}

/// Errors raised by graph lookups.
///
/// These indicate an id that was never loaded. During a search they point at
/// a data-integrity bug rather than bad user input.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No person with this id was loaded.
    #[error("Unknown person: {0}")]
    UnknownPerson(PersonId),

    /// No movie with this id was loaded.
    #[error("Unknown movie: {0}")]
    UnknownMovie(MovieId),
}

/// Frontier contract violations.
#[derive(Debug, Error)]
pub enum FrontierError {
    /// `remove` was called while the frontier was empty.
    #[error("Attempted to remove a node from an empty frontier")]
    EmptyFrontierRemoval,
}

/// Errors raised while loading relation files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A relation file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A relation file is not valid CSV or lacks a required column.
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        /// File being parsed.
        path: PathBuf,
        /// Parser failure, with its record position.
        #[source]
        source: csv::Error,
    },
}

/// Invalid search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A depth bound of zero would reject every search.
    #[error("max_degrees must be at least 1 (got {value})")]
    InvalidMaxDegrees {
        /// The rejected bound.
        value: usize,
    },

    /// A depth bound only holds under breadth-first removal order.
    #[error("max_degrees requires the queue frontier policy")]
    DepthLimitRequiresQueue,
}

/// Top-level error type for degrees.
#[derive(Debug, Error)]
pub enum DegreesError {
    /// See [`ResolveError`].
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// See [`GraphError`].
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// See [`FrontierError`].
    #[error("Frontier error: {0}")]
    Frontier(#[from] FrontierError),

    /// See [`LoadError`].
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// See [`ConfigError`].
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A result could not be serialized for output.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DegreesError {
    /// Returns true if a name or person could not be found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Resolve(ResolveError::NameNotFound { .. })
                | Self::Graph(GraphError::UnknownPerson(_))
        )
    }

    /// Returns true if the error signals a bug in the caller or the loaded
    /// graph rather than a user-facing condition.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::Frontier(_) | Self::Graph(_))
    }

    /// Returns true if this is a load error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}

/// Result type alias for degrees operations.
pub type DegreesResult<T> = Result<T, DegreesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_not_found_message() {
        let err = ResolveError::NameNotFound {
            name: "Nobody".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Person not found"));
        assert!(msg.contains("Nobody"));
    }

    #[test]
    fn test_unknown_person_message() {
        let err = GraphError::UnknownPerson(PersonId::new("42"));
        assert_eq!(err.to_string(), "Unknown person: 42");
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidMaxDegrees { value: 0 };
        assert!(err.to_string().contains("got 0"));
    }

    #[test]
    fn test_depth_limit_policy_message() {
        let err = ConfigError::DepthLimitRequiresQueue;
        assert!(err.to_string().contains("queue"));
    }

    #[test]
    fn test_degrees_error_from_resolve() {
        let err: DegreesError = ResolveError::NameNotFound {
            name: "x".to_string(),
        }
        .into();
        assert!(err.is_not_found());
        assert!(!err.is_invariant_violation());
    }

    #[test]
    fn test_degrees_error_from_frontier() {
        let err: DegreesError = FrontierError::EmptyFrontierRemoval.into();
        assert!(err.is_invariant_violation());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("empty frontier"));
    }

    #[test]
    fn test_degrees_error_from_graph() {
        let err: DegreesError = GraphError::UnknownPerson(PersonId::new("7")).into();
        assert!(err.is_not_found());
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_degrees_error_from_encode() {
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: DegreesError = source.into();
        assert!(matches!(err, DegreesError::Encode(_)));
        assert!(err.to_string().starts_with("Encode error"));
        assert!(!err.is_load());
    }

    #[test]
    fn test_degrees_error_from_load() {
        let err: DegreesError = LoadError::Io {
            path: PathBuf::from("people.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert!(err.is_load());
        assert!(err.to_string().contains("people.csv"));
    }
}
