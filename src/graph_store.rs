//! In-memory person/movie graph.
//!
//! People and movies are stored in hash maps keyed by id; the co-starring relation is
//! kept on both sides as ordered sets so neighbor iteration is reproducible.

use std::collections::{BTreeSet, HashMap};

use crate::error::GraphError;
use crate::model::{Movie, MovieId, Person, PersonId};

pub type GraphResult<T> = Result<T, GraphError>;

/// People, movies and the lower-cased name index.
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_person(&mut self, id: PersonId, name: String, birth: Option<String>) {
        let key = name.to_lowercase();
        if let Some(existing) = self.people.get_mut(&id) {
            let old_key = existing.name.to_lowercase();
            if old_key != key {
                if let Some(ids) = self.names.get_mut(&old_key) {
                    ids.remove(&id);
                    if ids.is_empty() {
                        self.names.remove(&old_key);
                    }
                }
            }
            existing.name = name;
            existing.birth = birth;
        } else {
            self.people.insert(
                id.clone(),
                Person {
                    id: id.clone(),
                    name,
                    birth,
                    movies: BTreeSet::new(),
                },
            );
        }
        self.names.entry(key).or_default().insert(id);
    }

    pub fn insert_movie(&mut self, id: MovieId, title: String, year: Option<String>) {
        if let Some(existing) = self.movies.get_mut(&id) {
            existing.title = title;
            existing.year = year;
            return;
        }
        self.movies.insert(
            id.clone(),
            Movie {
                id,
                title,
                year,
                stars: BTreeSet::new(),
            },
        );
    }

    // false, and nothing inserted, when either id is unknown
    pub fn add_star(&mut self, person_id: &PersonId, movie_id: &MovieId) -> bool {
        let (Some(person), Some(movie)) = (
            self.people.get_mut(person_id),
            self.movies.get_mut(movie_id),
        ) else {
            return false;
        };
        person.movies.insert(movie_id.clone());
        movie.stars.insert(person_id.clone());
        true
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn ids_for_name(&self, lowercased: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(lowercased)
    }

    /// `(movie, co-star)` pairs in ascending (movie id, person id) order, the person included.
    pub fn neighbors<'a>(
        &'a self,
        id: &PersonId,
    ) -> GraphResult<impl Iterator<Item = (&'a MovieId, &'a PersonId)> + 'a> {
        let person = self
            .people
            .get(id)
            .ok_or_else(|| GraphError::UnknownPerson(id.clone()))?;

        Ok(person
            .movies
            .iter()
            .filter_map(move |movie_id| self.movies.get(movie_id))
            .flat_map(|movie| movie.stars.iter().map(move |star| (&movie.id, star))))
    }

    pub fn movies_shared_by(&self, a: &PersonId, b: &PersonId) -> GraphResult<BTreeSet<MovieId>> {
        let first = self
            .people
            .get(a)
            .ok_or_else(|| GraphError::UnknownPerson(a.clone()))?;
        let second = self
            .people
            .get(b)
            .ok_or_else(|| GraphError::UnknownPerson(b.clone()))?;

        Ok(first.movies.intersection(&second.movies).cloned().collect())
    }
}
