//! Configuration constants and default values.
//!
//! Preference keys, notification names, timer periods, and the fixed
//! rendering parameters.

// === Preferences ===

/// ScreenSaverDefaults module name; scopes our one preference key.
pub const DEFAULTS_MODULE: &str = "QuoteSaver";

/// Key for the quote file path preference.
pub const PREF_QUOTE_FILE_PATH: &str = "QuoteFilePath";

// === Notifications ===

/// Distributed (cross-process) notification posted after every preference
/// write. Carries no payload; receivers re-read the store.
pub const PREFS_CHANGED_NOTIFICATION: &str = "QuoteSaverPreferencesChanged";

/// Local notification Cocoa posts whenever any user default changes.
pub const DEFAULTS_DID_CHANGE_NOTIFICATION: &str = "NSUserDefaultsDidChangeNotification";

// === Timing ===

/// Seconds between quote rotations (and preference re-checks).
pub const ROTATION_INTERVAL_SECS: f64 = 10.0;

/// Host animation clock period, ~30 Hz. Repaint only; never changes the
/// current selection.
pub const ANIMATION_FRAME_SECS: f64 = 1.0 / 30.0;

// === Rendering ===

/// Font size in the small preview thumbnail.
pub const FONT_SIZE_PREVIEW: f64 = 10.0;

/// Font size on the full-screen saver.
pub const FONT_SIZE_FULL: f64 = 32.0;

/// Horizontal margin on each side of the wrapped text block.
pub const TEXT_MARGIN: f64 = 40.0;

// === Default quote file locations (relative to $HOME) ===

/// Preferred default, used when it already exists.
pub const DESKTOP_QUOTES_REL: &str = "Desktop/codeQuotes.txt";

/// Directory for the fallback default; created on demand.
pub const CONFIG_DIR_REL: &str = ".config";

/// Fallback default inside the config directory.
pub const CONFIG_QUOTES_REL: &str = ".config/quotes.txt";
