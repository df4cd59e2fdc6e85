//! Thread-safe event bus using mpsc channels.
//!
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The UI thread polls for events via `EventBus::drain()` once per frame

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::trace;

use super::types::AppEvent;

/// Thread-safe event bus for application-wide event distribution.
///
/// Multiple publishers (hotkey callback, UI widgets) send events
/// concurrently; the UI thread is the single consumer.
///
/// # Example
///
/// ```
/// use hal_browser::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::HotkeyPressed);
///
/// let events = bus.drain();
/// assert_eq!(events, vec![AppEvent::HotkeyPressed]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot happen while it lives.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events, oldest first.
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
    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus has been dropped (app shutting down) the
    /// event is discarded.
    pub fn publish(&self, event: AppEvent) {
        trace!(event = event.description(), "publish");
        let _ = self.sender.send(event);
    }
}
