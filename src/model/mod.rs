//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! quote parsing and selection, the preference-store seam, default path
//! resolution, and the saver/config state machines.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod app_state;
pub mod constants;
pub mod paths;
pub mod quotes;
pub mod store;

pub use app_state::{ConfigState, SaverState};
pub use constants::*;
pub use paths::{default_quote_file_path, default_quote_file_path_in};
pub use quotes::{LoadError, Quote, QuoteDeck};
pub use store::{MemoryStore, PreferencesStore};
