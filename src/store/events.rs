//! Change notifications published by a store after a successful toggle.

use serde::{Deserialize, Serialize};

/// Event name used for favorite toggles.
pub const FAVORITE_TOGGLED: &str = "FavoriteToggled";

/// Payload delivered to listeners after a toggle has been applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub id: String,
    pub is_favorite: bool,
    /// Store revision after the toggle.
    pub revision: u64,
}

#[cfg(feature = "emitter")]
pub use notifier::ListenerId;
#[cfg(feature = "emitter")]
pub(crate) use notifier::Notifier;

#[cfg(feature = "emitter")]
mod notifier {
    use event_emitter_rs::EventEmitter;
    use parking_lot::Mutex;
    use tracing::warn;

    use super::{FavoriteToggled, FAVORITE_TOGGLED};

    /// Handle returned by `subscribe`, used to remove the listener again.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerId(String);

    impl ListenerId {
        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    /// Fans toggle events out to registered listeners.
    ///
    /// The emitter runs each listener on its own thread; `publish` joins them
    /// all so a toggle is finished, listeners included, when it returns.
    pub(crate) struct Notifier {
        emitter: Mutex<EventEmitter>,
    }

    impl Notifier {
        pub(crate) fn new() -> Self {
            Notifier {
                emitter: Mutex::new(EventEmitter::new()),
            }
        }

        pub(crate) fn subscribe<F>(&self, listener: F) -> ListenerId
        where
            F: Fn(FavoriteToggled) + Send + Sync + 'static,
        {
            let id = self
                .emitter
                .lock()
                .on(FAVORITE_TOGGLED, move |event: FavoriteToggled| listener(event));
            ListenerId(id)
        }

        pub(crate) fn unsubscribe(&self, id: &ListenerId) -> bool {
            self.emitter.lock().remove_listener(id.as_str()).is_some()
        }

        pub(crate) fn publish(&self, event: FavoriteToggled) {
            let id = event.id.clone();
            // Release the emitter before joining so listeners may subscribe.
            let handles = self.emitter.lock().emit(FAVORITE_TOGGLED, event);
            for handle in handles {
                if handle.join().is_err() {
                    warn!(movie_id = %id, "favorite listener panicked");
                }
            }
        }
    }

}
