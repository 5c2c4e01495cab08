//! FFI bindings for macOS.

pub mod appkit;
pub mod bridge;

pub use appkit::*;
pub use bridge::*;
