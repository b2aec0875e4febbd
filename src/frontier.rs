//! Frontiers of discovered but not yet expanded search nodes.
//!
//! Both variants keep a state count next to the removal structure, so membership
//! tests are O(1) whatever the removal order.

use std::collections::{HashMap, VecDeque};

use crate::error::FrontierError;
use crate::model::{MovieId, PersonId};

/// Position of an expanded node in a search's node arena.
pub type NodeIndex = usize;

/// A person reached during a search.
///
/// `parent` points at the node this one was discovered from, which always sits
/// earlier in the arena; `action` is the movie that links the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<NodeIndex>,
    pub action: Option<MovieId>,
}

impl SearchNode {
    pub fn root(state: PersonId) -> Self {
        SearchNode {
            state,
            parent: None,
            action: None,
        }
    }
}

pub trait Frontier {
    fn add(&mut self, node: SearchNode);

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Takes the next node to expand.
    fn remove_next(&mut self) -> Result<SearchNode, FrontierError>;

    /// Whether a node for `state` is currently waiting in the frontier.
    fn contains_state(&self, state: &PersonId) -> bool;
}

/// Multiset of the states currently held by a frontier.
#[derive(Debug, Default, Clone)]
struct StateCounts(HashMap<PersonId, usize>);

impl StateCounts {
    fn insert(&mut self, state: &PersonId) {
        *self.0.entry(state.clone()).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &PersonId) {
        if let Some(count) = self.0.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(state);
            }
        }
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.0.contains_key(state)
    }
}

/// FIFO frontier; yields nodes in breadth-first order.
#[derive(Debug, Default, Clone)]
pub struct QueueFrontier {
    nodes: VecDeque<SearchNode>,
    states: StateCounts,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.states.insert(&node.state);
        self.nodes.push_back(node);
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn remove_next(&mut self) -> Result<SearchNode, FrontierError> {
        let node = self.nodes.pop_front().ok_or(FrontierError::Empty)?;
        self.states.remove(&node.state);
        Ok(node)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }
}

/// LIFO frontier; yields nodes in depth-first order.
#[derive(Debug, Default, Clone)]
pub struct StackFrontier {
    nodes: Vec<SearchNode>,
    states: StateCounts,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.states.insert(&node.state);
        self.nodes.push(node);
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn remove_next(&mut self) -> Result<SearchNode, FrontierError> {
        let node = self.nodes.pop().ok_or(FrontierError::Empty)?;
        self.states.remove(&node.state);
        Ok(node)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.states.contains(state)
    }
}
