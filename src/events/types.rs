//! Event definitions (pure Rust, no FFI).

/// Application-level events.
///
/// The system has exactly one broadcast: "the preference changed, re-read
/// the store". It carries no payload; receivers always consult the store
/// rather than trusting a stale value from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The quote file path preference was written (locally or by another
    /// process).
    PreferencesChanged,
}
