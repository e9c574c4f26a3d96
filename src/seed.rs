//! Seed catalogs.
//!
//! A store is built once from a seed table. The built-in table below is the
//! catalog the application ships with; [`from_json`] loads an alternative
//! table of camelCase movie objects.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::movie::Movie;

const TRAILER: &str = "trailer_placeholder";

fn gallery(id: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("https://movieapp.example/images/{}/{}.jpg", id, n))
        .collect()
}

/// The built-in catalog. Ids are unique and no movie starts as a favorite.
pub fn movies() -> Vec<Movie> {
    vec![
        Movie::builder("tt0499549", "Avatar")
            .year(2009)
            .genre("Action, Adventure, Fantasy")
            .director("James Cameron")
            .actors("Sam Worthington, Zoe Saldana, Sigourney Weaver, Stephen Lang")
            .plot(
                "A paraplegic marine dispatched to the moon Pandora on a unique mission \
                 becomes torn between following his orders and protecting an alien \
                 civilization.",
            )
            .images(gallery("tt0499549", 4))
            .trailer(TRAILER)
            .rating("7.9")
            .build(),
        Movie::builder("tt0416449", "300")
            .year(2006)
            .genre("Action, Drama, Fantasy")
            .director("Zack Snyder")
            .actors("Gerard Butler, Lena Headey, Dominic West, David Wenham")
            .plot(
                "King Leonidas of Sparta and a force of 300 men fight the Persians at \
                 Thermopylae in 480 B.C.",
            )
            .images(gallery("tt0416449", 3))
            .trailer(TRAILER)
            .rating("7.7")
            .build(),
        Movie::builder("tt0848228", "The Avengers")
            .year(2012)
            .genre("Action, Sci-Fi, Thriller")
            .director("Joss Whedon")
            .actors("Robert Downey Jr., Chris Evans, Mark Ruffalo, Chris Hemsworth")
            .plot(
                "Earth's mightiest heroes must come together and learn to fight as a team \
                 if they are to stop the mischievous Loki and his alien army from \
                 enslaving humanity.",
            )
            .images(gallery("tt0848228", 4))
            .trailer(TRAILER)
            .rating("8.1")
            .build(),
        Movie::builder("tt0993846", "The Wolf of Wall Street")
            .year(2013)
            .genre("Biography, Comedy, Crime")
            .director("Martin Scorsese")
            .actors("Leonardo DiCaprio, Jonah Hill, Margot Robbie, Matthew McConaughey")
            .plot(
                "Based on the true story of Jordan Belfort, from his rise to a wealthy \
                 stock-broker living the high life to his fall involving crime, \
                 corruption and the federal government.",
            )
            .images(gallery("tt0993846", 3))
            .trailer(TRAILER)
            .rating("8.2")
            .build(),
        Movie::builder("tt0816692", "Interstellar")
            .year(2014)
            .genre("Adventure, Drama, Sci-Fi")
            .director("Christopher Nolan")
            .actors("Ellen Burstyn, Matthew McConaughey, Mackenzie Foy, John Lithgow")
            .plot(
                "A team of explorers travel through a wormhole in space in an attempt to \
                 ensure humanity's survival.",
            )
            .images(gallery("tt0816692", 5))
            .trailer(TRAILER)
            .rating("8.6")
            .build(),
        Movie::builder("tt1375666", "Inception")
            .year(2010)
            .genre("Action, Adventure, Sci-Fi")
            .director("Christopher Nolan")
            .actors("Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page, Tom Hardy")
            .plot(
                "A thief who steals corporate secrets through dream-sharing technology is \
                 given the inverse task of planting an idea into the mind of a C.E.O.",
            )
            .images(gallery("tt1375666", 3))
            .trailer(TRAILER)
            .rating("8.8")
            .build(),
        Movie::builder("tt1049413", "Up")
            .year(2009)
            .genre("Animation, Adventure, Comedy")
            .director("Pete Docter")
            .actors("Edward Asner, Jordan Nagai, John Ratzenberger, Christopher Plummer")
            .plot(
                "78-year-old Carl Fredricksen travels to Paradise Falls in his house \
                 equipped with balloons, inadvertently taking a young stowaway.",
            )
            .images(gallery("tt1049413", 2))
            .trailer(TRAILER)
            .rating("8.3")
            .build(),
    ]
}

/// Check that every id is non-empty and unique.
pub fn validate(movies: &[Movie]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(movies.len());
    for (index, movie) in movies.iter().enumerate() {
        if movie.id().is_empty() {
            return Err(CatalogError::EmptyId { index });
        }
        if !seen.insert(movie.id()) {
            return Err(CatalogError::DuplicateId(movie.id().to_string()));
        }
    }
    Ok(())
}

/// Parse and validate a JSON array of movie records.
pub fn from_json(json: &str) -> Result<Vec<Movie>, CatalogError> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;
    validate(&movies)?;
    Ok(movies)
}
