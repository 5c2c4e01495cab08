//! The preference-store seam (pure Rust, no FFI).
//!
//! The single persisted value — the quote file path — is shared across
//! process boundaries by the config panel (writer) and every running
//! saver view (readers). Both sides receive the store as an explicit
//! dependency so tests can substitute [`MemoryStore`]; the production
//! implementation backed by ScreenSaverDefaults lives in
//! `platform::macos::storage`.

use std::sync::Mutex;

use crate::events::{AppEvent, EventPublisher};
use crate::model::paths::default_quote_file_path;

/// Persistent, application-scoped storage for the quote file path.
///
/// `set` must flush to durable storage before returning and then emit the
/// change broadcast. Storage failures are absorbed: `get` and `set` are
/// best-effort and never surface errors.
pub trait PreferencesStore {
    /// The stored path, or `None` if never set.
    fn get(&self) -> Option<String>;

    /// Persist `path`, flush, and broadcast the change.
    fn set(&self, path: &str);

    /// Computed default path used when nothing is stored.
    fn default_path(&self) -> String {
        default_quote_file_path().display().to_string()
    }
}

/// In-memory store for tests.
///
/// Counts broadcasts so tests can assert "exactly once", and optionally
/// forwards each broadcast to an in-process [`EventPublisher`] — the test
/// stand-in for the distributed notification.
#[derive(Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
    broadcasts: Mutex<u32>,
    publisher: Option<EventPublisher>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose broadcasts are published as
    /// [`AppEvent::PreferencesChanged`] on the given publisher.
    pub fn with_publisher(publisher: EventPublisher) -> Self {
        Self {
            publisher: Some(publisher),
            ..Self::default()
        }
    }

    /// A store pre-seeded with a path, as if set by another process.
    pub fn with_value(path: &str) -> Self {
        let store = Self::new();
        *store.value.lock().unwrap() = Some(path.to_string());
        store
    }

    /// Write without broadcasting, simulating an external process whose
    /// notification has not arrived yet.
    pub fn set_silently(&self, path: &str) {
        *self.value.lock().unwrap() = Some(path.to_string());
    }

    /// How many change broadcasts `set` has emitted.
    pub fn broadcast_count(&self) -> u32 {
        *self.broadcasts.lock().unwrap()
    }
}

impl PreferencesStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.lock().unwrap().clone()
    }

    fn set(&self, path: &str) {
        *self.value.lock().unwrap() = Some(path.to_string());
        *self.broadcasts.lock().unwrap() += 1;
        if let Some(publisher) = &self.publisher {
            publisher.publish(AppEvent::PreferencesChanged);
        }
    }
}
