//! Quote text drawing.
//!
//! Kept separate from the view class so the drawing sequence reads as one
//! piece: fill the viewport black, measure the wrapped quote, center it,
//! draw in white.

use crate::platform::macos::ffi::appkit::{
    NSFontAttributeName, NSForegroundColorAttributeName, USES_FONT_LEADING,
    USES_LINE_FRAGMENT_ORIGIN,
};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nsstring_id, AnyObject, NSPoint, NSRect, NSSize, NSString,
};
use crate::{centered_origin, quote_font_size, wrap_width};

/// Fill `dirty_rect` with solid black.
///
/// # Safety
/// Must be called from the main thread inside a draw pass.
pub unsafe fn fill_background(dirty_rect: NSRect) {
    let black: id = msg_send![get_class("NSColor"), blackColor];
    let _: () = msg_send![black, setFill];
    let path: id = msg_send![get_class("NSBezierPath"), bezierPathWithRect: dirty_rect];
    let _: () = msg_send![path, fill];
}

/// Draw `text` word-wrapped and centered inside `bounds`.
///
/// The wrap constraint is `bounds.width` minus the fixed margins; the
/// draw rect keeps that full constraint width so drawing wraps exactly
/// as measured, while its origin centers the measured box.
///
/// # Safety
/// Must be called from the main thread inside a draw pass.
pub unsafe fn draw_quote(text: &str, bounds: NSRect, is_preview: bool) {
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: quote_font_size(is_preview)];
    let white: id = msg_send![get_class("NSColor"), whiteColor];

    let attrs: id = msg_send![get_class("NSMutableDictionary"), dictionary];
    let font_key = NSFontAttributeName as *const NSString as *mut AnyObject;
    let color_key = NSForegroundColorAttributeName as *const NSString as *mut AnyObject;
    let _: () = msg_send![attrs, setObject: font, forKey: font_key];
    let _: () = msg_send![attrs, setObject: white, forKey: color_key];

    let styled: id = msg_send![get_class("NSAttributedString"), alloc];
    let styled: id = msg_send![styled, initWithString: nsstring_id(text), attributes: attrs];

    let available = wrap_width(bounds.size.width);
    let constraint = NSSize::new(available, f64::MAX);
    let options: u64 = USES_LINE_FRAGMENT_ORIGIN | USES_FONT_LEADING;
    let text_rect: NSRect = msg_send![styled, boundingRectWithSize: constraint, options: options];

    let origin = NSPoint::new(
        bounds.origin.x + centered_origin(bounds.size.width, text_rect.size.width),
        bounds.origin.y + centered_origin(bounds.size.height, text_rect.size.height),
    );
    let draw_rect = NSRect::new(origin, NSSize::new(available, text_rect.size.height));
    let _: () = msg_send![styled, drawInRect: draw_rect];
}
