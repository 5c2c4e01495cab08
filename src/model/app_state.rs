//! Saver and config-panel state machines (pure Rust, no FFI).
//!
//! The Objective-C view and window classes are thin shells around these
//! two structs, so the timer/notification/confirm logic is unit-testable
//! without a display surface.

use rand::Rng;

use crate::events::AppEvent;
use crate::model::quotes::{Quote, QuoteDeck};
use crate::model::store::PreferencesStore;

/// Stored path, or the store's computed default when nothing is stored.
pub fn resolve_path(store: &dyn PreferencesStore) -> String {
    store.get().unwrap_or_else(|| store.default_path())
}

/// State behind the animated view.
///
/// `Stopped` ⇄ `Running` only; the host keeps the instance alive for as
/// long as it likes. The deck is rebuilt wholesale whenever the stored
/// path changes; the current selection is replaced on every rotation.
#[derive(Debug)]
pub struct SaverState {
    quote_file_path: String,
    deck: QuoteDeck,
    current: Option<Quote>,
    running: bool,
}

impl SaverState {
    /// Resolve the preference, load the deck, and pick an initial quote.
    pub fn new<R: Rng + ?Sized>(store: &dyn PreferencesStore, rng: &mut R) -> Self {
        let path = resolve_path(store);
        let deck = QuoteDeck::load(&path);
        let current = Some(deck.pick_random(rng).clone());
        Self {
            quote_file_path: path,
            deck,
            current,
            running: false,
        }
    }

    /// `Stopped -> Running`. The caller owns the actual timer.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// `Running -> Stopped`. No other state changes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quote_file_path(&self) -> &str {
        &self.quote_file_path
    }

    pub fn deck(&self) -> &QuoteDeck {
        &self.deck
    }

    /// Text of the current selection, if any. The deck's never-empty
    /// invariant means this is `Some` from construction onwards.
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(|q| q.text.as_str())
    }

    /// Rotation tick: re-check the store, reload if the path changed,
    /// always re-pick. Returns true (the surface is always dirty after a
    /// tick because the selection was replaced).
    pub fn tick<R: Rng + ?Sized>(&mut self, store: &dyn PreferencesStore, rng: &mut R) -> bool {
        self.sync_with_store(store, rng);
        self.current = Some(self.deck.pick_random(rng).clone());
        true
    }

    /// Change-notification handler, shared by the local and cross-process
    /// channels: same re-check-and-reload step as the tick, then dirty.
    pub fn handle_event<R: Rng + ?Sized>(
        &mut self,
        event: &AppEvent,
        store: &dyn PreferencesStore,
        rng: &mut R,
    ) -> bool {
        match event {
            AppEvent::PreferencesChanged => {
                self.sync_with_store(store, rng);
                true
            }
        }
    }

    /// Reload the deck (and re-pick) if the stored path differs from the
    /// one currently loaded. Returns whether a reload happened.
    fn sync_with_store<R: Rng + ?Sized>(
        &mut self,
        store: &dyn PreferencesStore,
        rng: &mut R,
    ) -> bool {
        let stored = resolve_path(store);
        if stored == self.quote_file_path {
            return false;
        }
        self.quote_file_path = stored;
        self.deck = QuoteDeck::load(&self.quote_file_path);
        self.current = Some(self.deck.pick_random(rng).clone());
        true
    }
}

/// State behind the configuration window: `Open` -> `Closed`.
#[derive(Debug)]
pub struct ConfigState {
    pending: String,
    open: bool,
}

impl ConfigState {
    /// Opens with the stored path (or the computed default) pending.
    pub fn new(store: &dyn PreferencesStore) -> Self {
        Self {
            pending: resolve_path(store),
            open: true,
        }
    }

    /// Direct edit of the path field.
    pub fn edit(&mut self, text: &str) {
        self.pending = text.to_string();
    }

    /// File chosen from the open panel; overwrites the pending value.
    pub fn choose_file(&mut self, path: &str) {
        self.pending = path.to_string();
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// OK: persist the pending value (which broadcasts) and close.
    pub fn confirm(&mut self, store: &dyn PreferencesStore) {
        store.set(&self.pending);
        self.open = false;
    }

    /// Cancel: close without touching the store.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::MemoryStore;

    fn rng() -> impl Rng {
        rand::rng()
    }

    #[test]
    fn new_state_has_a_selection_even_without_a_file() {
        let store = MemoryStore::with_value("/nonexistent/q.txt");
        let state = SaverState::new(&store, &mut rng());
        assert_eq!(
            state.current_text(),
            Some("Quote file not found at: /nonexistent/q.txt")
        );
        assert!(!state.is_running());
    }

    #[test]
    fn start_and_stop_toggle_running() {
        let store = MemoryStore::with_value("/nonexistent/q.txt");
        let mut state = SaverState::new(&store, &mut rng());
        state.start();
        assert!(state.is_running());
        state.stop();
        assert!(!state.is_running());
    }

    #[test]
    fn tick_with_unchanged_path_keeps_deck_and_is_dirty() {
        let store = MemoryStore::with_value("/nonexistent/q.txt");
        let mut state = SaverState::new(&store, &mut rng());
        let deck_before = state.deck().clone();
        assert!(state.tick(&store, &mut rng()));
        assert_eq!(state.deck(), &deck_before);
    }

    #[test]
    fn tick_reloads_when_stored_path_changes() {
        let store = MemoryStore::with_value("/old/q.txt");
        let mut state = SaverState::new(&store, &mut rng());
        store.set_silently("/new/q.txt");
        state.tick(&store, &mut rng());
        assert_eq!(state.quote_file_path(), "/new/q.txt");
        assert_eq!(
            state.current_text(),
            Some("Quote file not found at: /new/q.txt")
        );
    }

    #[test]
    fn change_event_refreshes_without_waiting_for_tick() {
        let store = MemoryStore::with_value("/a/q.txt");
        let mut state = SaverState::new(&store, &mut rng());
        store.set_silently("/b/q.txt");
        let dirty = state.handle_event(&AppEvent::PreferencesChanged, &store, &mut rng());
        assert!(dirty);
        assert_eq!(state.quote_file_path(), "/b/q.txt");
        assert_eq!(
            state.current_text(),
            Some("Quote file not found at: /b/q.txt")
        );
    }

    #[test]
    fn config_opens_with_stored_path() {
        let store = MemoryStore::with_value("/stored/q.txt");
        let config = ConfigState::new(&store);
        assert!(config.is_open());
        assert_eq!(config.pending(), "/stored/q.txt");
    }

    #[test]
    fn config_confirm_persists_and_closes() {
        let store = MemoryStore::new();
        let mut config = ConfigState::new(&store);
        config.edit("/tmp/q.txt");
        config.confirm(&store);
        assert!(!config.is_open());
        assert_eq!(store.get().as_deref(), Some("/tmp/q.txt"));
        assert_eq!(store.broadcast_count(), 1);
    }

    #[test]
    fn config_dismiss_leaves_store_untouched() {
        let store = MemoryStore::with_value("/keep/q.txt");
        let mut config = ConfigState::new(&store);
        config.choose_file("/discard/q.txt");
        config.dismiss();
        assert!(!config.is_open());
        assert_eq!(store.get().as_deref(), Some("/keep/q.txt"));
        assert_eq!(store.broadcast_count(), 0);
    }
}
