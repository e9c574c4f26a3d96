//! InMemoryMovieStore - Vec-backed store holding the catalog for one session.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::events::FavoriteToggled;
#[cfg(feature = "emitter")]
use super::events::{ListenerId, Notifier};
use super::{MovieStore, Versioned};
use crate::error::CatalogError;
use crate::movie::Movie;
use crate::seed;

struct Catalog {
    movies: Vec<Movie>,
    revision: u64,
}

/// In-memory movie store.
///
/// Movies keep their seed order for the lifetime of the store. All access goes
/// through one lock, so a toggle is never observed half-applied. Clones share
/// the same catalog, which lets one store be handed to every screen.
#[derive(Clone)]
pub struct InMemoryMovieStore {
    catalog: Arc<RwLock<Catalog>>,
    #[cfg(feature = "emitter")]
    notifier: Arc<Notifier>,
}

impl Default for InMemoryMovieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryMovieStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.catalog.read();
        f.debug_struct("InMemoryMovieStore")
            .field("movies", &catalog.movies.len())
            .field("revision", &catalog.revision)
            .finish()
    }
}

impl InMemoryMovieStore {
    /// Create a store holding the built-in catalog.
    pub fn new() -> Self {
        Self::with_movies(seed::movies())
    }

    /// Create a store from a seed table, rejecting empty or duplicate ids.
    pub fn from_seed(movies: Vec<Movie>) -> Result<Self, CatalogError> {
        seed::validate(&movies)?;
        Ok(Self::with_movies(movies))
    }

    /// Create a store from a JSON array of movie records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        seed::from_json(json).map(Self::with_movies)
    }

    fn with_movies(movies: Vec<Movie>) -> Self {
        info!(movies = movies.len(), "movie store created");
        InMemoryMovieStore {
            catalog: Arc::new(RwLock::new(Catalog {
                movies,
                revision: 0,
            })),
            #[cfg(feature = "emitter")]
            notifier: Arc::new(Notifier::new()),
        }
    }

    /// Register a listener called after every successful toggle.
    ///
    /// Listeners run before `toggle_favorite` returns and may read the store.
    #[cfg(feature = "emitter")]
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(FavoriteToggled) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a listener. Returns false if it was not registered.
    #[cfg(feature = "emitter")]
    pub fn unsubscribe(&self, id: &ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    #[cfg(feature = "emitter")]
    fn notify(&self, event: FavoriteToggled) {
        self.notifier.publish(event);
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&self, _event: FavoriteToggled) {}
}

impl MovieStore for InMemoryMovieStore {
    fn list(&self) -> Vec<Movie> {
        self.catalog.read().movies.clone()
    }

    fn favorites(&self) -> Vec<Movie> {
        self.catalog
            .read()
            .movies
            .iter()
            .filter(|movie| movie.is_favorite())
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.catalog
            .read()
            .movies
            .iter()
            .find(|movie| movie.id() == id)
            .cloned()
    }

    fn toggle_favorite(&self, id: &str) -> Option<bool> {
        let event = {
            let mut catalog = self.catalog.write();
            let Some(movie) = catalog.movies.iter_mut().find(|movie| movie.id() == id) else {
                debug!(movie_id = %id, "toggle ignored for unknown movie");
                return None;
            };
            let is_favorite = movie.toggle_favorite();
            catalog.revision += 1;
            FavoriteToggled {
                id: id.to_string(),
                is_favorite,
                revision: catalog.revision,
            }
        };

        debug!(
            movie_id = %event.id,
            is_favorite = event.is_favorite,
            revision = event.revision,
            "favorite toggled"
        );
        let is_favorite = event.is_favorite;
        self.notify(event);
        Some(is_favorite)
    }

    fn revision(&self) -> u64 {
        self.catalog.read().revision
    }

    fn snapshot(&self) -> Versioned<Vec<Movie>> {
        let catalog = self.catalog.read();
        Versioned {
            data: catalog.movies.clone(),
            version: catalog.revision,
        }
    }
}
