//! Maps typed names to person ids.

use crate::error::ResolveError;
use crate::graph_store::GraphStore;
use crate::model::{Candidate, PersonId};

/// Outcome of a successful name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Unique(PersonId),
    /// Several people share the name; the caller picks one with [`Resolution::select`].
    Ambiguous(Vec<Candidate>),
}

impl Resolution {
    /// Accepts `chosen` only if it is one of the resolved ids.
    pub fn select(&self, chosen: &str) -> Option<PersonId> {
        let chosen = chosen.trim();
        match self {
            Resolution::Unique(id) => (id.as_str() == chosen).then(|| id.clone()),
            Resolution::Ambiguous(candidates) => candidates
                .iter()
                .find(|c| c.id.as_str() == chosen)
                .map(|c| c.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'g> {
    graph: &'g GraphStore,
}

impl<'g> NameResolver<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    /// Case-insensitive lookup of a full name.
    ///
    /// Ambiguous names return every candidate, ordered by id.
    pub fn person_id_for_name(&self, name: &str) -> Result<Resolution, ResolveError> {
        let key = name.trim().to_lowercase();
        let ids = self
            .graph
            .ids_for_name(&key)
            .filter(|ids| !ids.is_empty())
            .ok_or_else(|| ResolveError::NotFound(name.trim().to_string()))?;

        let mut iter = ids.iter();
        if let (Some(id), None) = (iter.next(), iter.next()) {
            return Ok(Resolution::Unique(id.clone()));
        }

        let candidates = ids
            .iter()
            .filter_map(|id| self.graph.person(id))
            .map(Candidate::from)
            .collect();
        Ok(Resolution::Ambiguous(candidates))
    }
}
