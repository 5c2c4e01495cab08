//! QuoteSaverView, the ScreenSaverView subclass.
//!
//! The class is registered with the Objective-C runtime at load time and
//! instantiated by the screensaver host, so it is built with
//! `ClassBuilder` rather than a static declaration. All quote logic lives
//! in the pure [`SaverState`]; this file only owns:
//! - the boxed state pointer ivar
//! - the 10-second rotation timer
//! - the two change-notification subscriptions (local + distributed)
//! - the draw pass and the configure-sheet hook

use std::ffi::c_void;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{drain_events, init_event_bus, publish, AppEvent};
use crate::model::constants::{
    ANIMATION_FRAME_SECS, DEFAULTS_DID_CHANGE_NOTIFICATION, PREFS_CHANGED_NOTIFICATION,
    ROTATION_INTERVAL_SECS,
};
use crate::model::SaverState;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, Bool, NSRect, ObjectExt, YES,
};
use crate::platform::macos::storage::ScreenSaverDefaultsStore;
use crate::platform::macos::ui::config::create_config_panel;
use crate::platform::macos::ui::saver::drawing::{draw_quote, fill_background};

const CLASS_NAME: &std::ffi::CStr = c"QuoteSaverView";

fn saver_superclass() -> &'static AnyClass {
    AnyClass::get(c"ScreenSaverView").expect("ScreenSaver framework not loaded")
}

/// Register the QuoteSaverView class. Idempotent; returns the class.
pub fn register_saver_view_class() -> &'static AnyClass {
    if let Some(cls) = AnyClass::get(CLASS_NAME) {
        return cls;
    }
    let mut builder = ClassBuilder::new(CLASS_NAME, saver_superclass())
        .expect("QuoteSaverView already registered");

    builder.add_ivar::<*mut c_void>(c"_state"); // Box<SaverState>
    builder.add_ivar::<id>(c"_rotationTimer");
    builder.add_ivar::<id>(c"_configWindow");
    builder.add_ivar::<id>(c"_configController");

    unsafe {
        builder.add_method(
            sel!(initWithFrame:isPreview:),
            init_with_frame as unsafe extern "C-unwind" fn(_, _, _, _) -> _,
        );
        builder.add_method(
            sel!(startAnimation),
            start_animation as unsafe extern "C-unwind" fn(_, _),
        );
        builder.add_method(
            sel!(stopAnimation),
            stop_animation as unsafe extern "C-unwind" fn(_, _),
        );
        builder.add_method(
            sel!(animateOneFrame),
            animate_one_frame as unsafe extern "C-unwind" fn(_, _),
        );
        builder.add_method(
            sel!(drawRect:),
            draw_rect as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(rotateQuote:),
            rotate_quote as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(preferencesChanged:),
            preferences_changed as unsafe extern "C-unwind" fn(_, _, _),
        );
        builder.add_method(
            sel!(hasConfigureSheet),
            has_configure_sheet as unsafe extern "C-unwind" fn(_, _) -> _,
        );
        builder.add_method(
            sel!(configureSheet),
            configure_sheet as unsafe extern "C-unwind" fn(_, _) -> _,
        );
        builder.add_method(sel!(dealloc), dealloc as unsafe extern "C-unwind" fn(_, _));
    }

    builder.register()
}

// ============================================================================
// State ivar access
// ============================================================================

unsafe fn state_ref(this: &AnyObject) -> Option<&SaverState> {
    (*this.load_ivar::<*mut c_void>("_state") as *const SaverState).as_ref()
}

unsafe fn state_mut(this: &mut AnyObject) -> Option<&mut SaverState> {
    (*this.load_ivar::<*mut c_void>("_state") as *mut SaverState).as_mut()
}

/// Drain the in-process bus and run every pending event through the
/// state's refresh handler. Returns whether the surface went dirty.
unsafe fn process_pending_events(this: &mut AnyObject) -> bool {
    let events = drain_events();
    if events.is_empty() {
        return false;
    }
    let store = ScreenSaverDefaultsStore;
    let mut rng = rand::rng();
    let mut dirty = false;
    if let Some(state) = state_mut(this) {
        for event in &events {
            dirty |= state.handle_event(event, &store, &mut rng);
        }
    }
    dirty
}

// ============================================================================
// Lifecycle
// ============================================================================

unsafe extern "C-unwind" fn init_with_frame(
    this: &mut AnyObject,
    _cmd: Sel,
    frame: NSRect,
    is_preview: Bool,
) -> id {
    let this: id = msg_send![
        super(this as *mut AnyObject, saver_superclass()),
        initWithFrame: frame,
        isPreview: is_preview
    ];
    if this.is_null() {
        return nil;
    }

    init_event_bus();

    let store = ScreenSaverDefaultsStore;
    let mut rng = rand::rng();
    let state = Box::new(SaverState::new(&store, &mut rng));

    let obj = &mut *this;
    obj.store_ivar::<*mut c_void>("_state", Box::into_raw(state) as *mut c_void);
    obj.store_ivar::<id>("_rotationTimer", nil);
    obj.store_ivar::<id>("_configWindow", nil);
    obj.store_ivar::<id>("_configController", nil);

    // The ~30 Hz repaint clock; selection only changes on the 10 s timer.
    let _: () = msg_send![this, setAnimationTimeInterval: ANIMATION_FRAME_SECS];

    // Same handler for the local and the cross-process change channels.
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let _: () = msg_send![
        center,
        addObserver: this,
        selector: sel!(preferencesChanged:),
        name: nsstring_id(DEFAULTS_DID_CHANGE_NOTIFICATION),
        object: nil
    ];
    let dist: id = msg_send![get_class("NSDistributedNotificationCenter"), defaultCenter];
    let _: () = msg_send![
        dist,
        addObserver: this,
        selector: sel!(preferencesChanged:),
        name: nsstring_id(PREFS_CHANGED_NOTIFICATION),
        object: nil
    ];

    this
}

unsafe extern "C-unwind" fn dealloc(this: &mut AnyObject, _cmd: Sel) {
    let this_id: id = this as *mut AnyObject;

    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let _: () = msg_send![center, removeObserver: this_id];
    let dist: id = msg_send![get_class("NSDistributedNotificationCenter"), defaultCenter];
    let _: () = msg_send![dist, removeObserver: this_id];

    let timer: id = *this.load_ivar::<id>("_rotationTimer");
    if timer != nil {
        let _: () = msg_send![timer, invalidate];
    }

    let state = *this.load_ivar::<*mut c_void>("_state") as *mut SaverState;
    if !state.is_null() {
        drop(Box::from_raw(state));
        this.store_ivar::<*mut c_void>("_state", std::ptr::null_mut());
    }

    let _: () = msg_send![super(this_id, saver_superclass()), dealloc];
}

// ============================================================================
// Animation
// ============================================================================

unsafe extern "C-unwind" fn start_animation(this: &mut AnyObject, _cmd: Sel) {
    let this_id: id = this as *mut AnyObject;
    let _: () = msg_send![super(this_id, saver_superclass()), startAnimation];

    if let Some(state) = state_mut(this) {
        if state.is_running() {
            return;
        }
        state.start();
    }

    let timer: id = msg_send![
        get_class("NSTimer"),
        scheduledTimerWithTimeInterval: ROTATION_INTERVAL_SECS,
        target: this_id,
        selector: sel!(rotateQuote:),
        userInfo: nil,
        repeats: YES
    ];
    this.store_ivar::<id>("_rotationTimer", timer);
}

unsafe extern "C-unwind" fn stop_animation(this: &mut AnyObject, _cmd: Sel) {
    let this_id: id = this as *mut AnyObject;
    let _: () = msg_send![super(this_id, saver_superclass()), stopAnimation];

    if let Some(state) = state_mut(this) {
        state.stop();
    }

    let timer: id = *this.load_ivar::<id>("_rotationTimer");
    if timer != nil {
        let _: () = msg_send![timer, invalidate];
        this.store_ivar::<id>("_rotationTimer", nil);
    }
}

/// Rotation tick: re-check the preference, reload the deck if the path
/// changed, always pick a new quote.
unsafe extern "C-unwind" fn rotate_quote(this: &mut AnyObject, _cmd: Sel, _timer: id) {
    let this_id: id = this as *mut AnyObject;

    process_pending_events(this);

    let store = ScreenSaverDefaultsStore;
    let mut rng = rand::rng();
    if let Some(state) = state_mut(this) {
        state.tick(&store, &mut rng);
    }
    let _: () = msg_send![this_id, setNeedsDisplay: YES];
}

/// Repaint clock; redraws the current frame without touching selection.
unsafe extern "C-unwind" fn animate_one_frame(this: &mut AnyObject, _cmd: Sel) {
    let this_id: id = this as *mut AnyObject;
    let _: () = msg_send![this_id, setNeedsDisplay: YES];
}

// ============================================================================
// Change notifications (local + distributed, same selector)
// ============================================================================

unsafe extern "C-unwind" fn preferences_changed(this: &mut AnyObject, _cmd: Sel, _note: id) {
    let this_id: id = this as *mut AnyObject;

    publish(AppEvent::PreferencesChanged);
    if process_pending_events(this) {
        let _: () = msg_send![this_id, setNeedsDisplay: YES];
    }
}

// ============================================================================
// Drawing
// ============================================================================

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, rect: NSRect) {
    fill_background(rect);

    let Some(text) = state_ref(this).and_then(|s| s.current_text()) else {
        return;
    };
    let text = text.to_string();

    let this_id: id = this as *const AnyObject as id;
    let bounds: NSRect = msg_send![this_id, bounds];
    let preview: Bool = msg_send![this_id, isPreview];
    draw_quote(&text, bounds, preview.as_bool());
}

// ============================================================================
// Configuration
// ============================================================================

unsafe extern "C-unwind" fn has_configure_sheet(_this: &mut AnyObject, _cmd: Sel) -> Bool {
    YES
}

/// Hand the host a fresh config panel bound to the shared store. The
/// window and its controller are kept alive in ivars until replaced.
unsafe extern "C-unwind" fn configure_sheet(this: &mut AnyObject, _cmd: Sel) -> id {
    let (window, controller) = create_config_panel();
    this.store_ivar::<id>("_configWindow", window);
    this.store_ivar::<id>("_configController", controller);
    window
}
