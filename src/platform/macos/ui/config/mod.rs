//! The configuration window (quote file picker).

pub mod panel;

pub use panel::create_config_panel;
