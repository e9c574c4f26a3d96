mod error;
mod movie;
pub mod screen;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use movie::{Movie, MovieBuilder};
pub use screen::{resolve, Screen, ScreenContent};
pub use store::events::{FavoriteToggled, FAVORITE_TOGGLED};
pub use store::{InMemoryMovieStore, MovieStore, Versioned};

#[cfg(feature = "emitter")]
pub use store::events::ListenerId;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
