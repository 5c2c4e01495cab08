//! The "Quote Saver Options" window.
//!
//! A path text field, a Browse button backed by NSOpenPanel, and
//! OK/Cancel. The pending-value and confirm/dismiss logic lives in the
//! pure [`ConfigState`]; this file owns the controls, the open-panel
//! completion handler, and the presentation-mode-aware close.
//!
//! The host decides how the window is presented (attached sheet, modal
//! panel, or plain window), so closing probes for each mode in turn.

use std::ffi::c_void;

use block2::RcBlock;
use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::model::ConfigState;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, rust_string, Bool, NSApp, NSPoint, NSRect, NSSize,
    ObjectExt, NO, YES,
};
use crate::platform::macos::storage::ScreenSaverDefaultsStore;

const CONTROLLER_CLASS: &std::ffi::CStr = c"QuoteSaverConfigController";

const PANEL_WIDTH: f64 = 500.0;
const PANEL_HEIGHT: f64 = 200.0;

/// NSModalResponseOK.
const MODAL_RESPONSE_OK: isize = 1;

/// Build the options window and its controller.
///
/// Returns `(window, controller)`; the caller keeps both alive for as
/// long as the host displays the window.
///
/// # Safety contract
/// Main thread only (the host calls `configureSheet` there).
pub fn create_config_panel() -> (id, id) {
    let cls = register_controller_class();
    unsafe {
        let controller: id = msg_send![cls, new];
        let window = build_window(controller);
        (window, controller)
    }
}

fn register_controller_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CONTROLLER_CLASS) {
        return cls;
    }
    let superclass = AnyClass::get(c"NSObject").unwrap();
    let mut builder =
        ClassBuilder::new(CONTROLLER_CLASS, superclass).expect("config controller registered");

    builder.add_ivar::<id>(c"_window");
    builder.add_ivar::<id>(c"_pathField");
    builder.add_ivar::<*mut c_void>(c"_state"); // Box<ConfigState>

    unsafe {
        builder.add_method(
            sel!(browseForFile:),
            browse_for_file as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(sel!(ok:), ok as unsafe extern "C-unwind" fn(_, _, _));
        builder.add_method(sel!(cancel:), cancel as unsafe extern "C-unwind" fn(_, _, _));
        builder.add_method(
            sel!(pathChanged:),
            path_changed as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(sel!(dealloc), dealloc as unsafe extern "C-unwind" fn(_, _));
    }

    builder.register()
}

// ============================================================================
// Window construction
// ============================================================================

unsafe fn build_window(controller: id) -> id {
    // NSTitledWindowMask (1) | NSClosableWindowMask (2)
    let style: u64 = 1 | 2;
    let window: id = msg_send![get_class("NSWindow"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: NSRect::new(
            NSPoint::new(0.0, 0.0),
            NSSize::new(PANEL_WIDTH, PANEL_HEIGHT)
        ),
        styleMask: style,
        backing: 2u64, // NSBackingStoreBuffered
        defer: NO
    ];
    let _: () = msg_send![window, setTitle: nsstring_id("Quote Saver Options")];
    let _: () = msg_send![window, center];

    let content: id = msg_send![window, contentView];

    // Helper: static label
    let mk_label = |x, y, w, text: &str| -> id {
        let lbl: id = msg_send![get_class("NSTextField"), alloc];
        let lbl: id = msg_send![
            lbl,
            initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(w, 17.0))
        ];
        let _: () = msg_send![lbl, setBezeled: NO];
        let _: () = msg_send![lbl, setDrawsBackground: NO];
        let _: () = msg_send![lbl, setEditable: NO];
        let _: () = msg_send![lbl, setSelectable: NO];
        let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
        lbl
    };

    let label = mk_label(20.0, 150.0, 120.0, "Quote File Path:");

    // Editable path field, wide enough that typical paths do not wrap
    let state = ConfigState::new(&ScreenSaverDefaultsStore);
    let field: id = msg_send![get_class("NSTextField"), alloc];
    let field: id = msg_send![
        field,
        initWithFrame: NSRect::new(NSPoint::new(20.0, 110.0), NSSize::new(380.0, 22.0))
    ];
    let _: () = msg_send![field, setStringValue: nsstring_id(state.pending())];
    let _: () = msg_send![field, setTarget: controller];
    let _: () = msg_send![field, setAction: sel!(pathChanged:)];

    let mk_button = |x, y, title: &str, action: Sel| -> id {
        let btn: id = msg_send![get_class("NSButton"), alloc];
        let btn: id = msg_send![
            btn,
            initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(70.0, 32.0))
        ];
        let _: () = msg_send![btn, setTitle: nsstring_id(title)];
        let _: () = msg_send![btn, setBezelStyle: 1u64]; // NSBezelStyleRounded
        let _: () = msg_send![btn, setTarget: controller];
        let _: () = msg_send![btn, setAction: action];
        btn
    };

    let browse = mk_button(410.0, 105.0, "Browse...", sel!(browseForFile:));
    let ok_btn = mk_button(330.0, 20.0, "OK", sel!(ok:));
    let cancel_btn = mk_button(410.0, 20.0, "Cancel", sel!(cancel:));

    let _: () = msg_send![content, addSubview: label];
    let _: () = msg_send![content, addSubview: field];
    let _: () = msg_send![content, addSubview: browse];
    let _: () = msg_send![content, addSubview: ok_btn];
    let _: () = msg_send![content, addSubview: cancel_btn];

    let ctrl = &mut *controller;
    ctrl.store_ivar::<id>("_window", window);
    ctrl.store_ivar::<id>("_pathField", field);
    ctrl.store_ivar::<*mut c_void>("_state", Box::into_raw(Box::new(state)) as *mut c_void);

    window
}

// ============================================================================
// Controller state access
// ============================================================================

unsafe fn config_state_mut(this: &mut AnyObject) -> Option<&mut ConfigState> {
    (*this.load_ivar::<*mut c_void>("_state") as *mut ConfigState).as_mut()
}

/// Pull the field's current text into the pending value. Covers edits
/// that never fired the field's action (focus still in the field when OK
/// is clicked).
unsafe fn sync_pending_from_field(this: &mut AnyObject) {
    let field: id = *this.load_ivar::<id>("_pathField");
    if field == nil {
        return;
    }
    let value: id = msg_send![field, stringValue];
    let text = rust_string(value);
    if let Some(state) = config_state_mut(this) {
        state.edit(&text);
    }
}

// ============================================================================
// Actions
// ============================================================================

unsafe extern "C-unwind" fn browse_for_file(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let panel: id = msg_send![get_class("NSOpenPanel"), openPanel];
    let _: () = msg_send![panel, setTitle: nsstring_id("Choose Quote File")];
    let _: () = msg_send![panel, setPrompt: nsstring_id("Choose")];
    let _: () = msg_send![panel, setAllowsMultipleSelection: NO];
    let _: () = msg_send![panel, setCanChooseFiles: YES];
    let _: () = msg_send![panel, setCanChooseDirectories: NO];
    let types: id = msg_send![get_class("NSArray"), arrayWithObject: nsstring_id("txt")];
    let _: () = msg_send![panel, setAllowedFileTypes: types];

    // The completion handler outlives this call; carry raw pointers and
    // resolve them when Cocoa invokes the block on the main thread.
    let ctrl_addr = this as *mut AnyObject as usize;
    let panel_addr = panel as usize;
    let handler = RcBlock::new(move |response: isize| {
        if response != MODAL_RESPONSE_OK {
            return;
        }
        unsafe {
            let panel = panel_addr as id;
            let url: id = msg_send![panel, URL];
            if url == nil {
                return;
            }
            let path: id = msg_send![url, path];
            let path = rust_string(path);

            let ctrl = &mut *(ctrl_addr as id);
            if let Some(state) = config_state_mut(ctrl) {
                state.choose_file(&path);
            }
            let field: id = *ctrl.load_ivar::<id>("_pathField");
            if field != nil {
                let _: () = msg_send![field, setStringValue: nsstring_id(&path)];
            }
        }
    });
    let _: () = msg_send![panel, beginWithCompletionHandler: &*handler];
}

unsafe extern "C-unwind" fn path_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let value: id = msg_send![sender, stringValue];
    let text = rust_string(value);
    if let Some(state) = config_state_mut(this) {
        state.edit(&text);
    }
}

unsafe extern "C-unwind" fn ok(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    sync_pending_from_field(this);
    if let Some(state) = config_state_mut(this) {
        // Persists, flushes, and posts the distributed notification.
        state.confirm(&ScreenSaverDefaultsStore);
    }
    let window: id = *this.load_ivar::<id>("_window");
    close_config_window(window);
}

unsafe extern "C-unwind" fn cancel(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    if let Some(state) = config_state_mut(this) {
        state.dismiss();
    }
    let window: id = *this.load_ivar::<id>("_window");
    close_config_window(window);
}

unsafe extern "C-unwind" fn dealloc(this: &mut AnyObject, _cmd: Sel) {
    let state = *this.load_ivar::<*mut c_void>("_state") as *mut ConfigState;
    if !state.is_null() {
        drop(Box::from_raw(state));
        this.store_ivar::<*mut c_void>("_state", std::ptr::null_mut());
    }
    let superclass = AnyClass::get(c"NSObject").unwrap();
    let _: () = msg_send![super(this as *mut AnyObject, superclass), dealloc];
}

// ============================================================================
// Closing
// ============================================================================

/// Dismiss the window whichever way the host presented it: end the sheet
/// if attached, stop the modal session if modal, else a plain close.
unsafe fn close_config_window(window: id) {
    if window == nil {
        return;
    }
    let sheet_parent: id = msg_send![window, sheetParent];
    if sheet_parent != nil {
        let _: () = msg_send![sheet_parent, endSheet: window];
        return;
    }
    let is_modal: Bool = msg_send![window, isModalPanel];
    if is_modal.as_bool() {
        let app: id = NSApp();
        let _: () = msg_send![app, stopModal];
        let _: () = msg_send![window, orderOut: nil];
        return;
    }
    let _: () = msg_send![window, performClose: nil];
}
