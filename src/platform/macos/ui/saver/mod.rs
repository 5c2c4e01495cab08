//! The animated screensaver view.

pub mod drawing;
pub mod view;

pub use view::register_saver_view_class;

/// The screensaver host instantiates our principal class by name straight
/// from the bundle's Info.plist, before any Rust call site runs, so the
/// class must be registered when the dylib is loaded.
#[used]
#[link_section = "__DATA,__mod_init_func"]
static REGISTER_ON_LOAD: extern "C" fn() = {
    extern "C" fn register() {
        register_saver_view_class();
    }
    register
};
