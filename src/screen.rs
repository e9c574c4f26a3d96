//! Screen routes and the data each screen reads from the store.
//!
//! The application has three screens: the home list, a movie's detail page
//! and the watchlist of favorites. Rendering and back-stack handling belong to
//! the host; this module only names the routes and resolves what they show.

use std::fmt;

use crate::movie::Movie;
use crate::store::MovieStore;

/// Route argument carrying the movie id on the detail screen.
pub const DETAIL_ARGUMENT_KEY: &str = "movieId";

const HOME_ROUTE: &str = "homescreen";
const DETAIL_ROUTE: &str = "detailscreen";
const WATCHLIST_ROUTE: &str = "watchlistscreen";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Detail { movie_id: String },
    Watchlist,
}

impl Screen {
    /// Detail screen for one movie.
    pub fn detail(movie_id: impl Into<String>) -> Self {
        Screen::Detail {
            movie_id: movie_id.into(),
        }
    }

    /// Route pattern as registered with the host router, e.g.
    /// `detailscreen/{movieId}`.
    pub fn pattern(&self) -> String {
        match self {
            Screen::Home => HOME_ROUTE.to_string(),
            Screen::Detail { .. } => format!("{}/{{{}}}", DETAIL_ROUTE, DETAIL_ARGUMENT_KEY),
            Screen::Watchlist => WATCHLIST_ROUTE.to_string(),
        }
    }

    /// Concrete route for navigation, with the movie id filled in.
    pub fn route(&self) -> String {
        match self {
            Screen::Detail { movie_id } => format!("{}/{}", DETAIL_ROUTE, movie_id),
            other => other.pattern(),
        }
    }

    /// Parse a concrete route back into a screen.
    pub fn parse(route: &str) -> Option<Self> {
        match route.split_once('/') {
            None if route == HOME_ROUTE => Some(Screen::Home),
            None if route == WATCHLIST_ROUTE => Some(Screen::Watchlist),
            Some((DETAIL_ROUTE, movie_id)) if !movie_id.is_empty() && !movie_id.contains('/') => {
                Some(Screen::detail(movie_id))
            }
            _ => None,
        }
    }

    /// Top bar title for the list screens. The detail screen shows the movie
    /// title instead.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Screen::Home => Some("Movies"),
            Screen::Watchlist => Some("Your Watchlist"),
            Screen::Detail { .. } => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// What a screen displays once resolved against a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenContent {
    Movies(Vec<Movie>),
    Detail(Movie),
    /// The detail route named a movie the catalog does not have.
    NotFound { movie_id: String },
}

/// Read what `screen` shows from `store`.
pub fn resolve<S>(store: &S, screen: &Screen) -> ScreenContent
where
    S: MovieStore + ?Sized,
{
    match screen {
        Screen::Home => ScreenContent::Movies(store.list()),
        Screen::Watchlist => ScreenContent::Movies(store.favorites()),
        Screen::Detail { movie_id } => match store.find_by_id(movie_id) {
            Some(movie) => ScreenContent::Detail(movie),
            None => ScreenContent::NotFound {
                movie_id: movie_id.clone(),
            },
        },
    }
}
