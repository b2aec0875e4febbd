use std::fs;
use std::path::Path;

use degrees::{load_graph, LoadError, MovieId, NameResolver, PersonId, Resolution, SearchEngine};
use tempfile::TempDir;

fn write_tables(dir: &Path, people: &str, movies: &str, stars: &str) {
    fs::write(dir.join("people.csv"), people).expect("Unable to write people.csv");
    fs::write(dir.join("movies.csv"), movies).expect("Unable to write movies.csv");
    fs::write(dir.join("stars.csv"), stars).expect("Unable to write stars.csv");
}

fn small_dataset() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_tables(
        dir.path(),
        "id,name,birth\n\
         102,Kevin Bacon,1958\n\
         129,Tom Cruise,1962\n\
         144,Cary Elwes,1962\n\
         158,Tom Hanks,1956\n\
         1597,Mandy Patinkin,1952\n\
         163,Dustin Hoffman,1937\n\
         1697,Chris Sarandon,1942\n\
         193,Demi Moore,1962\n\
         197,Jack Nicholson,1937\n\
         200,Bill Paxton,1955\n\
         398,Sally Field,1946\n\
         420,Valeria Golino,1965\n\
         596520,Gerald R. Molen,1935\n\
         641,Gary Sinise,1955\n\
         705,Robin Wright,1966\n\
         914612,Emma Watson,1990\n\
         999,Tom Hanks,1990\n",
        "id,title,year\n\
         112384,Apollo 13,1995\n\
         104257,A Few Good Men,1992\n\
         109830,Forrest Gump,1994\n\
         93779,The Princess Bride,1987\n\
         95953,Rain Man,1988\n",
        "person_id,movie_id\n\
         102,104257\n\
         102,112384\n\
         129,104257\n\
         129,95953\n\
         144,93779\n\
         158,109830\n\
         158,112384\n\
         1597,93779\n\
         163,95953\n\
         1697,93779\n\
         193,104257\n\
         197,104257\n\
         200,112384\n\
         398,109830\n\
         420,95953\n\
         596520,95953\n\
         641,109830\n\
         641,112384\n\
         705,109830\n\
         705,93779\n\
         31337,93779\n",
    );
    dir
}

#[test]
fn test_load_directory() {
    let dir = small_dataset();
    let graph = load_graph(dir.path()).unwrap();
    assert_eq!(graph.person_count(), 17);
    assert_eq!(graph.movie_count(), 5);
    assert_eq!(graph.movie(&MovieId::from("93779")).unwrap().stars.len(), 4); // 31337 dropped
}

#[test]
fn test_degrees_between_known_actors() {
    let dir = small_dataset();
    let graph = load_graph(dir.path()).unwrap();
    let resolver = NameResolver::new(&graph);
    let engine = SearchEngine::new(&graph);

    let Resolution::Unique(emma) = resolver.person_id_for_name("emma watson").unwrap() else {
        panic!("Emma Watson should be unique");
    };
    let Resolution::Unique(bacon) = resolver.person_id_for_name("Kevin Bacon").unwrap() else {
        panic!("Kevin Bacon should be unique");
    };
    assert!(engine.shortest_path(&emma, &bacon).is_err()); // Emma Watson has no movies here

    let elwes = PersonId::from("144");
    let path = engine.shortest_path(&elwes, &bacon).unwrap();
    // Cary Elwes -> Robin Wright (Princess Bride) -> Tom Hanks or Gary Sinise (Forrest Gump) -> Bacon (Apollo 13)
    assert_eq!(path.degrees(), 3);
    assert_eq!(path.steps()[0].person, PersonId::from("705"));
    assert_eq!(path.steps()[1].movie, MovieId::from("109830"));
    assert_eq!(path.steps()[1].person, PersonId::from("158")); // "158" sorts before "641"
    assert_eq!(path.steps()[2].movie, MovieId::from("112384"));
}

#[test]
fn test_ambiguous_name_from_files() {
    let dir = small_dataset();
    let graph = load_graph(dir.path()).unwrap();
    let resolver = NameResolver::new(&graph);
    match resolver.person_id_for_name("Tom Hanks").unwrap() {
        Resolution::Ambiguous(candidates) => assert_eq!(candidates.len(), 2),
        other => panic!("expected candidates, got {:?}", other),
    }
}

#[test]
fn test_missing_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "id,name,birth\n").unwrap();
    fs::write(dir.path().join("movies.csv"), "id,title,year\n").unwrap();
    match load_graph(dir.path()) {
        Err(LoadError::Open { path, .. }) => assert!(path.ends_with("stars.csv")),
        other => panic!("expected a missing stars.csv, got {:?}", other.map(|g| g.person_count())),
    }
}
