mod support;

use movie_catalog::{CatalogError, InMemoryMovieStore, Movie, MovieStore};
use support::{ids, inception, two_movie_store, up};

#[test]
fn toggle_scenario() {
    let store = two_movie_store();

    assert_eq!(ids(&store.list()), vec!["1", "2"]);

    store.toggle_favorite("1");
    let favorites = store.favorites();
    assert_eq!(ids(&favorites), vec!["1"]);
    assert!(favorites[0].is_favorite());
    assert_eq!(favorites[0].title(), "Inception");

    store.toggle_favorite("1");
    assert!(store.favorites().is_empty());

    let before = store.list();
    store.toggle_favorite("99");
    assert_eq!(store.list(), before);
}

#[test]
fn toggling_twice_restores_every_flag() {
    let store = InMemoryMovieStore::new();

    for movie in store.list() {
        let before = store.find_by_id(movie.id()).unwrap().is_favorite();
        store.toggle_favorite(movie.id());
        store.toggle_favorite(movie.id());
        assert_eq!(store.find_by_id(movie.id()).unwrap().is_favorite(), before);
    }
    assert!(store.favorites().is_empty());
}

#[test]
fn favorites_is_an_ordered_subset_of_list() {
    let store = InMemoryMovieStore::new();
    let all = store.list();

    // Toggle every other movie, back to front
    for movie in all.iter().step_by(2).rev() {
        store.toggle_favorite(movie.id());
    }

    let list = store.list();
    let favorites = store.favorites();
    let expected: Vec<Movie> = list.iter().filter(|m| m.is_favorite()).cloned().collect();
    assert_eq!(favorites, expected);
    assert_eq!(favorites.len(), all.len().div_ceil(2));
}

#[test]
fn unknown_id_changes_nothing() {
    let store = two_movie_store();
    store.toggle_favorite("2");
    let before = store.snapshot();

    assert_eq!(store.toggle_favorite("99"), None);
    assert_eq!(store.toggle_favorite(""), None);

    assert_eq!(store.snapshot(), before);
}

#[test]
fn find_by_id_returns_the_unique_match() {
    let store = two_movie_store();

    assert_eq!(store.find_by_id("2"), Some(up()));
    assert_eq!(store.find_by_id("1"), Some(inception()));
    assert_eq!(store.find_by_id("3"), None);
}

#[test]
fn preseeded_favorites_start_set() {
    let store = InMemoryMovieStore::from_seed(vec![
        inception(),
        Movie::builder("2", "Up").favorite(true).build(),
    ])
    .unwrap();

    assert_eq!(ids(&store.favorites()), vec!["2"]);
    assert_eq!(store.toggle_favorite("2"), Some(false));
    assert!(store.favorites().is_empty());
}

#[test]
fn revision_counts_successful_toggles() {
    let store = two_movie_store();
    assert_eq!(store.revision(), 0);

    store.toggle_favorite("1");
    store.toggle_favorite("missing");
    store.toggle_favorite("2");

    assert_eq!(store.revision(), 2);
    let snapshot = store.snapshot();
    assert_eq!(snapshot.version, 2);
    assert_eq!(ids(&snapshot.data), vec!["1", "2"]);
}

#[test]
fn store_from_json_seed() {
    let json = serde_json::to_string(&vec![inception(), up()]).unwrap();
    let store = InMemoryMovieStore::from_json(&json).unwrap();

    assert_eq!(store.list(), vec![inception(), up()]);
}

#[test]
fn invalid_seeds_are_rejected() {
    let duplicate = InMemoryMovieStore::from_seed(vec![inception(), inception()]);
    assert!(matches!(duplicate, Err(CatalogError::DuplicateId(id)) if id == "1"));

    let empty = InMemoryMovieStore::from_seed(vec![Movie::builder("", "Nameless").build()]);
    assert!(matches!(empty, Err(CatalogError::EmptyId { index: 0 })));

    let garbage = InMemoryMovieStore::from_json("[{\"id\": 1}]");
    assert!(matches!(garbage, Err(CatalogError::Parse(_))));
}

#[test]
fn shared_handles_see_each_others_toggles() {
    let store = two_movie_store();
    let home = store.clone();
    let watchlist = store.clone();

    home.toggle_favorite("2");

    assert_eq!(ids(&watchlist.favorites()), vec!["2"]);
    assert!(store.find_by_id("2").unwrap().is_favorite());
}

#[test]
fn store_works_behind_a_trait_object() {
    let store: Box<dyn MovieStore> = Box::new(two_movie_store());

    assert_eq!(store.toggle_favorite("1"), Some(true));
    assert_eq!(ids(&store.favorites()), vec!["1"]);
}
