//! Storage for macOS using ScreenSaverDefaults.
//!
//! Persists the quote file path to the screensaver's preference domain
//! and broadcasts changes across processes.

pub mod preferences;

pub use preferences::*;
