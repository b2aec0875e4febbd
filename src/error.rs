//! Error types for loading, querying and searching the graph.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::PersonId;

/// Errors raised by graph queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown person id {0}")]
    UnknownPerson(PersonId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrontierError {
    /// `remove_next` was called without checking `is_empty` first.
    #[error("frontier is empty")]
    Empty,
}

/// Errors returned by a path search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown person id {0}")]
    UnknownPerson(PersonId),

    #[error("{from} and {to} are not connected")]
    NotConnected { from: PersonId, to: PersonId },

    #[error(transparent)]
    Frontier(#[from] FrontierError),
}

impl From<GraphError> for SearchError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::UnknownPerson(id) => SearchError::UnknownPerson(id),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no person named '{0}'")]
    NotFound(String),
}

/// Errors raised while reading the CSV tables.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type SearchResult<T> = Result<T, SearchError>;
