//! In-process pub/sub for preference-change propagation.
//!
//! The change broadcast has two implementations: this mpsc-based bus for
//! same-process delivery and tests, and the macOS distributed notification
//! (posted by `platform::macos::storage`) for cross-process delivery. The
//! platform observers feed received notifications back into this bus so
//! the saver state handles both channels through one code path.

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
