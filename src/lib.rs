#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! A macOS screensaver that shows a random quote from a user-chosen text
//! file, rotating every ten seconds.
//!
//! The crate splits into a pure layer (`model`, `events`) that carries all
//! quote, preference, and refresh logic, and a `platform::macos` layer that
//! wraps it in the ScreenSaverView subclass, the config window, and
//! ScreenSaverDefaults persistence. This file holds the layout helpers the
//! draw pass shares with tests; keep it free of FFI.

pub mod events;
pub mod model;
pub mod platform;

// Re-export model types for convenience
pub use model::{Quote, QuoteDeck, SaverState};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

use model::constants::{FONT_SIZE_FULL, FONT_SIZE_PREVIEW, TEXT_MARGIN};

/// Width available for wrapping quote text inside a viewport, after the
/// fixed side margins. Never collapses below 1.0 for degenerate viewports.
pub fn wrap_width(viewport_width: f64) -> f64 {
    (viewport_width - TEXT_MARGIN * 2.0).max(1.0)
}

/// Origin along one axis that centers `content` inside `viewport`.
pub fn centered_origin(viewport: f64, content: f64) -> f64 {
    (viewport - content) / 2.0
}

/// Font size for quote text. Preview thumbnails in System Settings get a
/// much smaller face than the full-screen saver.
pub fn quote_font_size(is_preview: bool) -> f64 {
    if is_preview {
        FONT_SIZE_PREVIEW
    } else {
        FONT_SIZE_FULL
    }
}
