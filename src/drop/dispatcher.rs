//! The single subscription to the host drag-and-drop source.
//!
//! The host delivers drag-and-drop at the window level; all zones share one
//! subscription held for the lifetime of the UI root. Taking the stream
//! twice is a bug in the embedding shell, so the second attempt fails
//! loudly instead of quietly accumulating subscriptions.

use thiserror::Error;
use tokio::sync::mpsc;

use super::DragEvent;
use crate::host::HostBridge;

/// Subscription errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// The bridge's drag stream was already taken by an earlier subscriber.
    #[error("the host drag-and-drop source is already subscribed")]
    AlreadySubscribed,
}

/// Holder of the process's one drag-event subscription.
///
/// Dropping the dispatcher releases the subscription; the host's sender
/// handles keep working but their events go nowhere, which is the expected
/// teardown order (UI root first, host shell after).
#[derive(Debug)]
pub struct DropEventDispatcher {
    events: mpsc::UnboundedReceiver<DragEvent>,
}

impl DropEventDispatcher {
    /// Claim the bridge's drag stream.
    ///
    /// Fails with [`SubscribeError::AlreadySubscribed`] when called a second
    /// time on the same bridge, no matter how the first subscription ended.
    pub fn subscribe(bridge: &mut HostBridge) -> Result<Self, SubscribeError> {
        let events = bridge
            .take_drag_events()
            .ok_or(SubscribeError::AlreadySubscribed)?;
        tracing::debug!("subscribed to host drag-and-drop source");
        Ok(Self { events })
    }

    /// Await the next drag signal.
    ///
    /// Returns `None` once every host-side sender handle is gone, i.e. the
    /// host shell tore down the source.
    pub async fn next(&mut self) -> Option<DragEvent> {
        self.events.recv().await
    }

    /// Release the subscription explicitly.
    ///
    /// Equivalent to dropping the dispatcher; exists so teardown reads as a
    /// deliberate step at the call site.
    pub fn unsubscribe(self) {
        tracing::debug!("unsubscribed from host drag-and-drop source");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drop::DropEvent;

    #[tokio::test]
    async fn test_subscribe_is_singleton() {
        let mut bridge = HostBridge::new();
        let first = DropEventDispatcher::subscribe(&mut bridge);
        assert!(first.is_ok());

        let second = DropEventDispatcher::subscribe(&mut bridge);
        assert_eq!(second.unwrap_err(), SubscribeError::AlreadySubscribed);

        // Releasing the first subscription does not re-arm the bridge
        first.unwrap().unsubscribe();
        let third = DropEventDispatcher::subscribe(&mut bridge);
        assert_eq!(third.unwrap_err(), SubscribeError::AlreadySubscribed);
    }

    #[tokio::test]
    async fn test_events_arrive_and_source_close_ends_stream() {
        let mut bridge = HostBridge::new();
        let source = bridge.drag_source();
        let mut dispatcher = DropEventDispatcher::subscribe(&mut bridge).unwrap();

        source.file_drop(3.0, 4.0, vec!["/x".to_string()]);
        assert_eq!(
            dispatcher.next().await,
            Some(DragEvent::Drop(DropEvent {
                x: 3.0,
                y: 4.0,
                paths: vec!["/x".to_string()],
            }))
        );

        // All sender handles dropped: the stream ends
        drop(source);
        drop(bridge);
        assert_eq!(dispatcher.next().await, None);
    }

    #[tokio::test]
    async fn test_rapid_hover_ticks_share_one_subscription() {
        let mut bridge = HostBridge::new();
        let source = bridge.drag_source();
        let mut dispatcher = DropEventDispatcher::subscribe(&mut bridge).unwrap();

        for _ in 0..100 {
            source.drag_over();
        }
        for _ in 0..100 {
            assert_eq!(dispatcher.next().await, Some(DragEvent::Over));
        }
    }
}
