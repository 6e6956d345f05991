//! Event system for highlighting notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! Rust's ownership model makes traditional observer patterns tricky.
//! We use `tokio::sync::broadcast` for a safe, async-friendly event bus.
//!
//! Key differences from OOP observers:
//! - No object references to manage
//! - Events are values, not callbacks
//! - Subscribers receive copies (Clone)
//! - No lifetime complexity

use std::time::Duration;

use glint_syntax::{Language, PassKind};
use tokio::sync::broadcast;

use crate::session::TabId;

/// Events emitted by a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightEvent {
    /// A tab was opened with a highlighter for `language`
    TabOpened { tab: TabId, language: Language },
    /// A tab was closed
    TabClosed(TabId),
    /// An edit scheduled a pass `delay` from now
    HighlightScheduled { tab: TabId, delay: Duration },
    /// A pass ran
    HighlightCompleted { tab: TabId, pass: PassKind },
    /// A scheduled pass found the text unchanged
    HighlightSkipped(TabId),
    /// A theme was applied to every tab
    ThemeChanged(String),
    /// Configuration was replaced and highlighters rebuilt
    ConfigReloaded,
}

/// Event bus for broadcasting highlighting events.
///
/// ## Design
///
/// Using a broadcast channel allows:
/// - Multiple subscribers (status bar, tests, tooling)
/// - Async reception
/// - No direct coupling between components
/// - Lagged receivers don't block senders
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<HighlightEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 256 events in the buffer
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: HighlightEvent) {
        // Ignore error if no receivers (not a problem)
        let _ = self.sender.send(event);
    }

    /// Subscribes to events.
    ///
    /// Returns a receiver that will get all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<HighlightEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper for processing events asynchronously.
///
/// ## Example
///
/// ```ignore
/// let mut handler = EventHandler::new(session.subscribe());
///
/// tokio::spawn(async move {
///     while let Some(event) = handler.next().await {
///         if let HighlightEvent::HighlightCompleted { tab, pass } = event {
///             println!("{tab}: {pass:?}");
///         }
///     }
/// });
/// ```
pub struct EventHandler {
    receiver: broadcast::Receiver<HighlightEvent>,
}

impl EventHandler {
    /// Creates a new event handler.
    pub fn new(receiver: broadcast::Receiver<HighlightEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<HighlightEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next event if one is already queued.
    pub fn try_next(&mut self) -> Option<HighlightEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!("Event handler lagged, missed {} events", n);
                    continue;
                }
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(HighlightEvent::ConfigReloaded);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, HighlightEvent::ConfigReloaded);
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        let tab = TabId::new();
        bus.emit(HighlightEvent::HighlightSkipped(tab));

        assert_eq!(rx1.recv().await.unwrap(), HighlightEvent::HighlightSkipped(tab));
        assert_eq!(rx2.recv().await.unwrap(), HighlightEvent::HighlightSkipped(tab));
    }

    #[tokio::test]
    async fn test_handler_stops_when_bus_dropped() {
        let bus = EventBus::new();
        let mut handler = EventHandler::new(bus.subscribe());
        bus.emit(HighlightEvent::ThemeChanged("dark".into()));
        drop(bus);

        assert_eq!(
            handler.next().await,
            Some(HighlightEvent::ThemeChanged("dark".into()))
        );
        assert_eq!(handler.next().await, None);
    }

    #[test]
    fn test_emit_without_subscribers() {
        let bus = EventBus::new();
        bus.emit(HighlightEvent::ConfigReloaded);
        let mut handler = EventHandler::new(bus.subscribe());
        assert_eq!(handler.try_next(), None);
    }
}
