//! Global access to the application event bus.
//!
//! The sender lives in a `OnceLock` (it is `Send + Sync`); the receiver
//! sits behind a `Mutex` and is only touched from the main thread.
//!
//! Unlike an app with a single `main`, a screensaver bundle has no one
//! startup point — the host may instantiate several views, in any order.
//! `init_event_bus` is therefore idempotent: the first caller wins.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();
static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global bus if no one has yet. Safe to call repeatedly.
pub fn init_event_bus() {
    if SENDER.get().is_some() {
        return;
    }
    let (sender, receiver) = mpsc::channel();
    // On a lost race the extra channel is simply dropped.
    let _ = SENDER.set(sender);
    let _ = RECEIVER.set(Mutex::new(receiver));
}

/// A publisher handle for the global bus.
pub fn publisher() -> EventPublisher {
    init_event_bus();
    EventPublisher::from_sender(SENDER.get().expect("event bus sender").clone())
}

/// Publish one event to the global bus.
pub fn publish(event: AppEvent) {
    init_event_bus();
    if let Some(sender) = SENDER.get() {
        // Ignore send errors - receiver dropped means we are shutting down
        let _ = sender.send(event);
    }
}

/// Drain all pending events from the global bus.
pub fn drain_events() -> Vec<AppEvent> {
    init_event_bus();
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };
    let Ok(receiver) = receiver.lock() else {
        return Vec::new();
    };
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global bus is process-wide state, so these tests share it; each
    // drains before asserting to stay independent of ordering.

    #[test]
    fn init_is_idempotent() {
        init_event_bus();
        init_event_bus();
        let _ = drain_events();
        publish(AppEvent::PreferencesChanged);
        assert_eq!(drain_events(), vec![AppEvent::PreferencesChanged]);
    }
}
