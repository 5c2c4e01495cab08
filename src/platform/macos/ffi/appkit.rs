//! Hand-written AppKit constants.
//!
//! The attributed-string keys used for text drawing are exported data
//! symbols, declared here directly rather than pulling in the generated
//! NSAttributedString bindings for two constants.

use objc2_foundation::NSString;

#[link(name = "AppKit", kind = "framework")]
extern "C" {
    /// Attribute key for the drawing font.
    pub static NSFontAttributeName: &'static NSString;
    /// Attribute key for the text color.
    pub static NSForegroundColorAttributeName: &'static NSString;
}

/// `NSStringDrawingUsesLineFragmentOrigin` - measure as multi-line text.
pub const USES_LINE_FRAGMENT_ORIGIN: u64 = 1 << 0;

/// `NSStringDrawingUsesFontLeading` - include font leading in the height.
pub const USES_FONT_LEADING: u64 = 1 << 1;
