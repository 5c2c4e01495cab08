//! Thin convenience layer over the objc2 ecosystem.
//!
//! Re-exports the handful of runtime types the UI code uses constantly,
//! plus helpers for dynamic class lookup, NSString conversion in both
//! directions, and ivar access on runtime-registered classes.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr};

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{class, msg_send, sel, ClassType};

// ============================================================================
// Type aliases
// ============================================================================

/// Untyped Objective-C object pointer. Used for classes we only know at
/// runtime (ScreenSaverDefaults, runtime-registered views); prefer typed
/// objc2 pointers where the class is statically known.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL constants (u8-backed, not Rust bool).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

// ============================================================================
// Foundation types
// ============================================================================

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

// ============================================================================
// Memory management
// ============================================================================

pub use objc2::rc::Retained;

// ============================================================================
// Helper functions
// ============================================================================

/// The shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![objc2_app_kit::NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw id pointer.
///
/// The pointer is retained; for objects handed straight to Cocoa (window
/// titles, dictionary values) that retain is intentionally left to Cocoa.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Copy an NSString into a Rust `String`. `nil` becomes the empty string.
///
/// # Safety
/// `s` must be `nil` or a valid NSString.
pub unsafe fn rust_string(s: id) -> String {
    if s == nil {
        return String::new();
    }
    let ptr: *const c_char = msg_send![s, UTF8String];
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// Look up a class by name, panicking if not found.
///
/// Only used for classes guaranteed to exist in AppKit/Foundation; soft
/// lookups (ScreenSaverDefaults) go through `AnyClass::get` directly.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

// ============================================================================
// Ivar access on runtime-registered classes
// ============================================================================

use objc2::encode::Encode;

/// Extension trait for accessing instance variables on AnyObject.
///
/// # Safety contract (all methods)
/// The ivar must exist on the object's class and be of type `T`; UI
/// objects must only be touched from the main thread.
pub trait ObjectExt {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;
    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T;
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn load_ivar_mut<T: Encode>(&mut self, name: &str) -> &mut T {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load_mut::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}
