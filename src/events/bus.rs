//! Thread-safe event bus using mpsc channels.
//!
//! Any thread can publish via `EventPublisher::publish()`; the main
//! thread drains with `EventBus::drain()`. Pure std, no FFI.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer event bus.
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A cloneable publisher handle for this bus.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next pending event, without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// All pending events, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Queue an event for the next drain. Send errors are ignored: a
    /// dropped receiver means the view is being torn down.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bus_is_empty() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn publish_then_drain_round_trips() {
        let bus = EventBus::new();
        bus.publisher().publish(AppEvent::PreferencesChanged);

        let events = bus.drain();
        assert_eq!(events, vec![AppEvent::PreferencesChanged]);
    }

    #[test]
    fn drain_empties_the_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        publisher.publish(AppEvent::PreferencesChanged);
        publisher.publish(AppEvent::PreferencesChanged);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn cloned_publishers_feed_the_same_bus() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(AppEvent::PreferencesChanged);
        pub2.publish(AppEvent::PreferencesChanged);

        assert_eq!(bus.drain().len(), 2);
    }
}
