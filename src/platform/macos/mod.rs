//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to Cocoa and AppKit drawing constants
//! - UI components (the ScreenSaverView subclass, the config window)
//! - Storage (ScreenSaverDefaults persistence + distributed notification)

pub mod ffi;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use ffi::bridge;
pub use storage::*;
pub use ui::*;
