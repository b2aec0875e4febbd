//! Breadth-first search for the shortest chain of shared movies between two people.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{SearchError, SearchResult};
use crate::frontier::{Frontier, NodeIndex, QueueFrontier, SearchNode};
use crate::graph_store::GraphStore;
use crate::model::{MovieId, PersonId};

/// One link of a path: `person` starred in `movie` with the previous person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

/// Steps after the source up to and including the target; empty when they are the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<PathStep>);

impl Path {
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn degrees(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'g> {
    graph: &'g GraphStore,
}

impl<'g> SearchEngine<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    // ties go to the path found first when expanding ids in ascending order
    pub fn shortest_path(&self, source: &PersonId, target: &PersonId) -> SearchResult<Path> {
        self.path_with::<QueueFrontier>(source, target)
    }

    /// Only a FIFO frontier guarantees a shortest path.
    pub fn path_with<F: Frontier + Default>(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> SearchResult<Path> {
        for id in [source, target] {
            if !self.graph.contains_person(id) {
                return Err(SearchError::UnknownPerson(id.clone()));
            }
        }

        if source == target {
            return Ok(Path::default());
        }

        // direct connection, lowest movie id first
        let shared = self.graph.movies_shared_by(source, target)?;
        if let Some(movie) = shared.into_iter().next() {
            debug!(%source, %target, %movie, "direct connection");
            return Ok(Path(vec![PathStep {
                movie,
                person: target.clone(),
            }]));
        }

        let mut frontier = F::default();
        frontier.add(SearchNode::root(source.clone()));
        let mut explored: HashSet<PersonId> = HashSet::new();
        let mut arena: Vec<SearchNode> = Vec::new();

        loop {
            if frontier.is_empty() {
                info!(%source, %target, explored = arena.len(), "not connected");
                return Err(SearchError::NotConnected {
                    from: source.clone(),
                    to: target.clone(),
                });
            }

            let node = frontier.remove_next()?;
            explored.insert(node.state.clone());
            let index = arena.len();
            arena.push(node);
            let current = &arena[index];

            for (movie, person) in self.graph.neighbors(&current.state)? {
                if person == &current.state {
                    continue;
                }

                if person == target {
                    info!(%source, %target, explored = arena.len(), "found solution");
                    return Ok(reconstruct(&arena, index, movie, person));
                }

                if !explored.contains(person) && !frontier.contains_state(person) {
                    frontier.add(SearchNode {
                        state: person.clone(),
                        parent: Some(index),
                        action: Some(movie.clone()),
                    });
                    // marked now so a second co-star link cannot enqueue it again
                    explored.insert(person.clone());
                }
            }
        }
    }
}

// walks parent links from `last` back to the root
fn reconstruct(arena: &[SearchNode], last: NodeIndex, movie: &MovieId, target: &PersonId) -> Path {
    let mut steps = vec![PathStep {
        movie: movie.clone(),
        person: target.clone(),
    }];

    let mut node = &arena[last];
    while let (Some(parent), Some(action)) = (node.parent, &node.action) {
        steps.push(PathStep {
            movie: action.clone(),
            person: node.state.clone(),
        });
        node = &arena[parent];
    }

    steps.reverse();
    Path(steps)
}
