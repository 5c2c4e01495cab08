//! Default quote-file location.
//!
//! Preference order: `~/Desktop/codeQuotes.txt` when it already exists,
//! otherwise `~/.config/quotes.txt`. The `.config` directory (not the
//! file) is created on demand so a later save has somewhere to land.

use std::path::{Path, PathBuf};

use crate::model::constants::{CONFIG_DIR_REL, CONFIG_QUOTES_REL, DESKTOP_QUOTES_REL};

/// Default path relative to the real home directory.
pub fn default_quote_file_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/"));
    default_quote_file_path_in(&home)
}

/// Default path relative to an explicit home directory (testable).
pub fn default_quote_file_path_in(home: &Path) -> PathBuf {
    let desktop = home.join(DESKTOP_QUOTES_REL);
    if desktop.exists() {
        return desktop;
    }

    let config_dir = home.join(CONFIG_DIR_REL);
    if !config_dir.exists() {
        if let Err(err) = std::fs::create_dir_all(&config_dir) {
            log::warn!("could not create {}: {err}", config_dir.display());
        }
    }

    // The file itself appears the first time the user saves a quote file.
    home.join(CONFIG_QUOTES_REL)
}
