//! Scenario tests for the saver and config state machines, driven through
//! the in-memory store and the in-process event bus.

use std::fs;

use quotesaver::events::{AppEvent, EventBus};
use quotesaver::model::{
    default_quote_file_path_in, ConfigState, MemoryStore, PreferencesStore, SaverState,
};
use tempfile::TempDir;

#[test]
fn preference_round_trips_within_one_process() {
    let store = MemoryStore::new();
    store.set("/tmp/q.txt");
    assert_eq!(store.get().as_deref(), Some("/tmp/q.txt"));
}

#[test]
fn confirm_persists_pending_value_and_broadcasts_once() {
    let store = MemoryStore::new();
    let mut config = ConfigState::new(&store);

    config.edit("/tmp/q.txt");
    config.confirm(&store);

    assert_eq!(store.get().as_deref(), Some("/tmp/q.txt"));
    assert_eq!(store.broadcast_count(), 1);
    assert!(!config.is_open());
}

#[test]
fn broadcast_refreshes_selection_without_waiting_for_tick() {
    let dir = TempDir::new().unwrap();
    let path_a = dir.path().join("a.txt");
    let path_b = dir.path().join("b.txt");
    fs::write(&path_a, "quote from file A\n").unwrap();
    fs::write(&path_b, "quote from file B\n").unwrap();

    let bus = EventBus::new();
    let store = MemoryStore::with_publisher(bus.publisher());
    store.set_silently(path_a.to_str().unwrap());

    let mut rng = rand::rng();
    let mut state = SaverState::new(&store, &mut rng);
    state.start();
    assert_eq!(state.current_text(), Some("quote from file A"));

    // Another process writes the preference and the broadcast arrives.
    store.set(path_b.to_str().unwrap());
    assert_eq!(store.broadcast_count(), 1);

    let mut dirty = false;
    for event in bus.drain() {
        dirty |= state.handle_event(&event, &store, &mut rng);
    }

    assert!(dirty);
    assert_eq!(state.current_text(), Some("quote from file B"));
    assert_eq!(state.quote_file_path(), path_b.to_str().unwrap());
}

#[test]
fn broadcast_with_unchanged_path_still_marks_dirty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("q.txt");
    fs::write(&path, "same old quote\n").unwrap();

    let store = MemoryStore::with_value(path.to_str().unwrap());
    let mut rng = rand::rng();
    let mut state = SaverState::new(&store, &mut rng);

    let dirty = state.handle_event(&AppEvent::PreferencesChanged, &store, &mut rng);
    assert!(dirty);
    assert_eq!(state.current_text(), Some("same old quote"));
}

#[test]
fn tick_picks_from_reloaded_deck_after_path_change() {
    let dir = TempDir::new().unwrap();
    let path_a = dir.path().join("a.txt");
    let path_b = dir.path().join("b.txt");
    fs::write(&path_a, "alpha\n").unwrap();
    fs::write(&path_b, "beta\n").unwrap();

    let store = MemoryStore::with_value(path_a.to_str().unwrap());
    let mut rng = rand::rng();
    let mut state = SaverState::new(&store, &mut rng);
    assert_eq!(state.current_text(), Some("alpha"));

    store.set_silently(path_b.to_str().unwrap());
    assert!(state.tick(&store, &mut rng));
    assert_eq!(state.current_text(), Some("beta"));
}

#[test]
fn default_path_prefers_existing_desktop_file() {
    let home = TempDir::new().unwrap();
    let desktop = home.path().join("Desktop");
    fs::create_dir_all(&desktop).unwrap();
    fs::write(desktop.join("codeQuotes.txt"), "q\n").unwrap();

    let path = default_quote_file_path_in(home.path());
    assert_eq!(path, desktop.join("codeQuotes.txt"));
}

#[test]
fn default_path_falls_back_to_config_dir_and_creates_it() {
    let home = TempDir::new().unwrap();

    let path = default_quote_file_path_in(home.path());
    assert_eq!(path, home.path().join(".config/quotes.txt"));
    assert!(home.path().join(".config").is_dir());
    // Only the directory is created; the file appears on first save.
    assert!(!path.exists());
}
