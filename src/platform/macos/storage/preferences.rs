//! Persistence of the quote file path to ScreenSaverDefaults.
//!
//! Screensaver instances run inside host processes (legacyScreenSaver,
//! System Settings), so plain standardUserDefaults would land in the
//! host's domain; ScreenSaverDefaults scopes the key to our module name.
//! Every write is flushed with `synchronize` and followed by a
//! distributed notification so other processes refresh without polling.
//!
//! All failures here are absorbed: callers see best-effort get/set, and
//! the only trace is a `log` warning.

use crate::model::constants::{DEFAULTS_MODULE, PREFS_CHANGED_NOTIFICATION, PREF_QUOTE_FILE_PATH};
use crate::model::store::PreferencesStore;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, rust_string, AnyClass, Bool,
};

/// The defaults object scoped to our module, or standardUserDefaults when
/// the ScreenSaver framework is not loaded (e.g. unit tests).
///
/// # Safety
/// Must be called with a valid autorelease pool (the host provides one on
/// every callback).
unsafe fn saver_defaults() -> id {
    if let Some(cls) = AnyClass::get(c"ScreenSaverDefaults") {
        msg_send![cls, defaultsForModuleWithName: nsstring_id(DEFAULTS_MODULE)]
    } else {
        msg_send![get_class("NSUserDefaults"), standardUserDefaults]
    }
}

/// Read a string preference. Synchronizes first so writes flushed by
/// other processes are visible.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud = saver_defaults();
    if ud == nil {
        log::warn!("preferences unavailable; using defaults");
        return None;
    }
    let _: Bool = msg_send![ud, synchronize];
    let obj: id = msg_send![ud, stringForKey: nsstring_id(key)];
    if obj == nil {
        None
    } else {
        Some(rust_string(obj))
    }
}

/// Write a string preference and force an immediate flush, so another
/// process reading right after we return sees the new value.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn prefs_set_string(key: &str, value: &str) {
    let ud = saver_defaults();
    if ud == nil {
        log::warn!("preferences unavailable; dropping write of {key}");
        return;
    }
    let _: () = msg_send![ud, setObject: nsstring_id(value), forKey: nsstring_id(key)];
    let flushed: Bool = msg_send![ud, synchronize];
    if !flushed.as_bool() {
        log::warn!("preference flush failed for {key}");
    }
}

/// Post the payload-less cross-process change broadcast.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn post_prefs_changed_notification() {
    let center: id = msg_send![get_class("NSDistributedNotificationCenter"), defaultCenter];
    let _: () = msg_send![
        center,
        postNotificationName: nsstring_id(PREFS_CHANGED_NOTIFICATION),
        object: nil
    ];
}

/// Production [`PreferencesStore`] backed by ScreenSaverDefaults.
///
/// Stateless; every call goes straight to the defaults system so the
/// cross-process last-writer-wins semantics are Cocoa's, not ours.
pub struct ScreenSaverDefaultsStore;

impl PreferencesStore for ScreenSaverDefaultsStore {
    fn get(&self) -> Option<String> {
        unsafe { prefs_get_string(PREF_QUOTE_FILE_PATH) }
    }

    fn set(&self, path: &str) {
        unsafe {
            prefs_set_string(PREF_QUOTE_FILE_PATH, path);
            post_prefs_changed_notification();
        }
    }
}
