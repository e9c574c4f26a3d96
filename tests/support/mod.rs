#![allow(dead_code)]

use movie_catalog::{InMemoryMovieStore, Movie};

pub fn inception() -> Movie {
    Movie::builder("1", "Inception")
        .year(2010)
        .genre("Action, Adventure, Sci-Fi")
        .director("Christopher Nolan")
        .actors("Leonardo DiCaprio, Joseph Gordon-Levitt")
        .plot("A thief plants an idea inside a dream.")
        .images(["https://img.test/inception/1.jpg", "https://img.test/inception/2.jpg"])
        .trailer("trailer_placeholder")
        .rating("8.8")
        .build()
}

pub fn up() -> Movie {
    Movie::builder("2", "Up")
        .year(2009)
        .genre("Animation, Adventure, Comedy")
        .director("Pete Docter")
        .actors("Edward Asner, Jordan Nagai")
        .plot("An old man flies his house to South America.")
        .image("https://img.test/up/1.jpg")
        .trailer("trailer_placeholder")
        .rating("8.3")
        .build()
}

/// Two-movie store: Inception ("1") then Up ("2"), no favorites.
pub fn two_movie_store() -> InMemoryMovieStore {
    InMemoryMovieStore::from_seed(vec![inception(), up()]).unwrap()
}

pub fn ids(movies: &[Movie]) -> Vec<String> {
    movies.iter().map(|movie| movie.id().to_string()).collect()
}
