//! UI components: the saver view and the configuration window.

pub mod config;
pub mod saver;

pub use config::create_config_panel;
pub use saver::register_saver_view_class;
