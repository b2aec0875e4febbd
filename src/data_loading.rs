//! Reads the people, movies and stars tables into a [`GraphStore`].
//!
//! Loading is best-effort: rows that do not parse, and star rows that point at an
//! unknown person or movie, are skipped. Only a missing or unreadable file fails.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::graph_store::GraphStore;
use crate::model::{non_empty, MovieId, PersonId};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: PersonId,
    name: String,
    birth: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: MovieId,
    title: String,
    year: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: PersonId,
    movie_id: MovieId,
}

/// Loads `people.csv`, `movies.csv` and `stars.csv` from `directory`.
pub fn load_graph(directory: impl AsRef<Path>) -> Result<GraphStore, LoadError> {
    let directory = directory.as_ref();
    let open = |name: &str| {
        let path = directory.join(name);
        File::open(&path).map_err(|source| LoadError::Open { path, source })
    };

    let people = open(PEOPLE_FILE)?;
    let movies = open(MOVIES_FILE)?;
    let stars = open(STARS_FILE)?;
    debug!(directory = %directory.display(), "loading graph");

    load_tables(
        (people, &directory.join(PEOPLE_FILE)),
        (movies, &directory.join(MOVIES_FILE)),
        (stars, &directory.join(STARS_FILE)),
    )
}

/// Same as [`load_graph`] over arbitrary readers, one per table.
pub fn load_graph_from_readers<P: Read, M: Read, S: Read>(
    people: P,
    movies: M,
    stars: S,
) -> Result<GraphStore, LoadError> {
    load_tables(
        (people, Path::new(PEOPLE_FILE)),
        (movies, Path::new(MOVIES_FILE)),
        (stars, Path::new(STARS_FILE)),
    )
}

fn load_tables<P: Read, M: Read, S: Read>(
    people: (P, &Path),
    movies: (M, &Path),
    stars: (S, &Path),
) -> Result<GraphStore, LoadError> {
    let mut store = GraphStore::new();

    // people first, then movies, so star rows can be resolved
    let skipped_people = read_table(people.0, people.1, |row: PersonRow| {
        store.insert_person(row.id, row.name.trim().to_string(), non_empty(row.birth));
    })?;

    let skipped_movies = read_table(movies.0, movies.1, |row: MovieRow| {
        store.insert_movie(row.id, row.title.trim().to_string(), non_empty(row.year));
    })?;

    let mut linked = 0usize;
    let mut dangling = 0usize;
    let skipped_stars = read_table(stars.0, stars.1, |row: StarRow| {
        if store.add_star(&row.person_id, &row.movie_id) {
            linked += 1;
        } else {
            debug!(person = %row.person_id, movie = %row.movie_id, "skipping dangling star row");
            dangling += 1;
        }
    })?;

    info!(
        people = store.person_count(),
        movies = store.movie_count(),
        stars = linked,
        dangling,
        skipped = skipped_people + skipped_movies + skipped_stars,
        "graph loaded"
    );
    Ok(store)
}

/// Deserializes every row of a table, handing good rows to `each`.
///
/// Returns the number of rows that failed to parse.
fn read_table<R, T, F>(reader: R, path: &Path, mut each: F) -> Result<usize, LoadError>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut(T),
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    rdr.headers().map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut skipped = 0;
    for result in rdr.deserialize::<T>() {
        match result {
            Ok(row) => each(row),
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => {
                return Err(LoadError::Csv {
                    path: path.to_path_buf(),
                    source: err,
                });
            } // a failed read is not a bad row
            Err(err) => {
                debug!(file = %path.display(), error = %err, "skipping malformed row");
                skipped += 1;
            }
        }
    }
    Ok(skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEOPLE: &str = "id,name,birth\n1,Kevin Bacon,1958\n2,Tom Cruise,1962\n3,Tom Hanks,\n";
    const MOVIES: &str = "id,title,year\n10,A Few Good Men,1992\n20,Apollo 13,1995\n";
    const STARS: &str = "person_id,movie_id\n1,10\n2,10\n1,20\n3,20\n";

    #[test]
    fn test_load_from_readers() {
        let store = load_graph_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap();
        assert_eq!(store.person_count(), 3);
        assert_eq!(store.movie_count(), 2);

        let bacon = store.person(&PersonId::from("1")).unwrap();
        assert_eq!(bacon.name, "Kevin Bacon");
        assert_eq!(bacon.birth.as_deref(), Some("1958"));
        assert_eq!(bacon.movies.len(), 2);

        let hanks = store.person(&PersonId::from("3")).unwrap();
        assert_eq!(hanks.birth, None); // empty birth column
    }

    #[test]
    fn test_dangling_star_rows_are_skipped() {
        let stars = "person_id,movie_id\n1,10\n99,10\n1,99\n";
        let store = load_graph_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), stars.as_bytes()).unwrap();
        let movie = store.movie(&MovieId::from("10")).unwrap();
        assert_eq!(movie.stars.len(), 1);
        assert!(!store.contains_person(&PersonId::from("99")));
        assert!(store.movie(&MovieId::from("99")).is_none());
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let people = "id,name,birth\n1,Kevin Bacon,1958\n2\n3,Tom Hanks,1956\n";
        let store = load_graph_from_readers(people.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap();
        assert_eq!(store.person_count(), 2); // row with one field dropped
        assert!(!store.contains_person(&PersonId::from("2")));
    }

    // hands out `data` once, then fails every read
    struct FailingReader {
        data: Option<&'static [u8]>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.data.take() {
                Some(data) => {
                    let n = data.len().min(buf.len());
                    buf[..n].copy_from_slice(&data[..n]);
                    self.data = Some(&data[n..]).filter(|rest| !rest.is_empty());
                    Ok(n)
                }
                None => Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone")),
            }
        }
    }

    #[test]
    fn test_read_failure_mid_table_is_an_error() {
        let people = FailingReader {
            data: Some(&b"id,name,birth\n1,Kevin Bacon,1958\n"[..]),
        };
        let result = load_graph_from_readers(people, MOVIES.as_bytes(), STARS.as_bytes());
        match result {
            Err(LoadError::Csv { path, .. }) => assert_eq!(path, Path::new(PEOPLE_FILE)),
            other => panic!("expected a read error, got {:?}", other.map(|g| g.person_count())),
        }
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let err = load_graph("/definitely/not/a/real/dir").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains(PEOPLE_FILE));
    }
}
