//! Degrees of separation between actors.
//!
//! Loads a person/movie graph from CSV tables and finds the shortest chain of shared
//! movies between two people with a breadth-first search.

pub mod data_loading;
pub mod error;
pub mod frontier;
pub mod graph_store;
pub mod model;
pub mod name_resolver;
pub mod search;

pub use data_loading::{load_graph, load_graph_from_readers};
pub use error::{FrontierError, GraphError, LoadError, ResolveError, SearchError};
pub use frontier::{Frontier, QueueFrontier, SearchNode, StackFrontier};
pub use graph_store::GraphStore;
pub use model::{Candidate, Movie, MovieId, Person, PersonId};
pub use name_resolver::{NameResolver, Resolution};
pub use search::{Path, PathStep, SearchEngine};
