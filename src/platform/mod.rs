//! Platform-specific implementations.
//!
//! Everything that touches Cocoa or the ScreenSaver framework lives under
//! `macos`; the rest of the crate is portable Rust and runs in tests on
//! any platform.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
