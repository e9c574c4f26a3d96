//! Movie stores - the single source of truth for the catalog.
//!
//! A store owns every [`Movie`] record and exposes read projections plus one
//! mutation, [`MovieStore::toggle_favorite`]. Reads hand out owned snapshots,
//! so callers can never change a record behind the store's back.
//!
//! ## Example
//!
//! ```
//! use movie_catalog::{InMemoryMovieStore, MovieStore};
//!
//! let store = InMemoryMovieStore::new();
//! let first = store.list()[0].id().to_string();
//!
//! store.toggle_favorite(&first);
//! assert_eq!(store.favorites().len(), 1);
//!
//! store.toggle_favorite("no-such-movie"); // ignored
//! assert_eq!(store.revision(), 1);
//! ```

pub mod events;
mod in_memory;

use crate::movie::Movie;

/// A value read together with the store revision it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Read and toggle access to a movie catalog.
pub trait MovieStore: Send + Sync {
    /// Every movie in insertion order.
    fn list(&self) -> Vec<Movie>;

    /// Movies whose favorite flag is set, in insertion order.
    ///
    /// Recomputed on every call.
    fn favorites(&self) -> Vec<Movie> {
        self.list()
            .into_iter()
            .filter(Movie::is_favorite)
            .collect()
    }

    /// Look up a movie by id. A miss is `None`, not an error.
    fn find_by_id(&self, id: &str) -> Option<Movie>;

    /// Flip the favorite flag of the movie with this id and return the new
    /// flag. Unknown ids leave the catalog untouched and return `None`.
    fn toggle_favorite(&self, id: &str) -> Option<bool>;

    /// Number of toggles applied so far.
    fn revision(&self) -> u64;

    /// The full list paired with the revision it reflects.
    fn snapshot(&self) -> Versioned<Vec<Movie>>;
}

pub use in_memory::InMemoryMovieStore;
