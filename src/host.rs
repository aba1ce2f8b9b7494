//! Channel bridge between the host shell and the UI core.
//!
//! The host application shell (window chrome, webview, process lifecycle)
//! is an external collaborator. It talks to this core over two unbounded
//! channels: a drag-and-drop stream (drops plus hover ticks) and a backend
//! event stream (result messages, configuration echoes). The host side
//! holds cheap cloneable sender handles; the UI side takes each receiver
//! exactly once.

use tokio::sync::mpsc;

use crate::drop::{DragEvent, DropEvent};
use crate::models::{AppConfig, Message};

/// An event from the backend/host on the result stream.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// A result message to append to the log.
    Message(Message),
    /// The persisted configuration changed (echo of a write, or an external
    /// edit picked up by the host).
    ConfigChanged(AppConfig),
}

/// Receiver half of the backend event stream.
pub type BackendEvents = mpsc::UnboundedReceiver<BackendEvent>;

/// Host-side handle for the drag-and-drop source.
///
/// Sends are fire-and-forget; once the UI root tears down and the receiver
/// is gone, events fall on the floor by design.
#[derive(Debug, Clone)]
pub struct DragSourceHandle {
    tx: mpsc::UnboundedSender<DragEvent>,
}

impl DragSourceHandle {
    /// Deliver a window-level file drop.
    pub fn file_drop(&self, x: f64, y: f64, paths: Vec<String>) {
        let _ = self.tx.send(DragEvent::Drop(DropEvent { x, y, paths }));
    }

    /// Deliver a drag-over hover tick.
    pub fn drag_over(&self) {
        let _ = self.tx.send(DragEvent::Over);
    }
}

/// Host-side handle for the backend event stream.
#[derive(Debug, Clone)]
pub struct HostEventSender {
    tx: mpsc::UnboundedSender<BackendEvent>,
}

impl HostEventSender {
    /// Deliver a result message.
    pub fn message(&self, message: Message) {
        let _ = self.tx.send(BackendEvent::Message(message));
    }

    /// Deliver a configuration-changed echo.
    pub fn config_changed(&self, config: AppConfig) {
        let _ = self.tx.send(BackendEvent::ConfigChanged(config));
    }
}

/// The event transport between host shell and UI core.
///
/// Created once per UI root. Sender handles may be cloned freely; each
/// receiver can be taken only once, which is what makes the drag-and-drop
/// subscription a process-wide singleton (see
/// [`DropEventDispatcher::subscribe`](crate::drop::DropEventDispatcher::subscribe)).
#[derive(Debug)]
pub struct HostBridge {
    drag_tx: mpsc::UnboundedSender<DragEvent>,
    drag_rx: Option<mpsc::UnboundedReceiver<DragEvent>>,
    backend_tx: mpsc::UnboundedSender<BackendEvent>,
    backend_rx: Option<BackendEvents>,
}

impl HostBridge {
    /// Create a bridge with both streams unclaimed.
    pub fn new() -> Self {
        let (drag_tx, drag_rx) = mpsc::unbounded_channel();
        let (backend_tx, backend_rx) = mpsc::unbounded_channel();
        Self {
            drag_tx,
            drag_rx: Some(drag_rx),
            backend_tx,
            backend_rx: Some(backend_rx),
        }
    }

    /// Handle the host shell uses to push drag-and-drop events.
    pub fn drag_source(&self) -> DragSourceHandle {
        DragSourceHandle {
            tx: self.drag_tx.clone(),
        }
    }

    /// Handle the host shell uses to push backend events.
    pub fn host_events(&self) -> HostEventSender {
        HostEventSender {
            tx: self.backend_tx.clone(),
        }
    }

    /// Take the backend event receiver. `None` after the first call.
    pub fn take_backend_events(&mut self) -> Option<BackendEvents> {
        self.backend_rx.take()
    }

    /// Take the drag event receiver. `None` after the first call.
    ///
    /// Prefer [`DropEventDispatcher::subscribe`](crate::drop::DropEventDispatcher::subscribe),
    /// which wraps this with a proper error.
    pub(crate) fn take_drag_events(&mut self) -> Option<mpsc::UnboundedReceiver<DragEvent>> {
        self.drag_rx.take()
    }
}

impl Default for HostBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;
    use crate::models::Variant;

    #[tokio::test]
    async fn test_drag_events_flow_in_order() {
        let mut bridge = HostBridge::new();
        let source = bridge.drag_source();
        let mut rx = bridge.take_drag_events().unwrap();

        source.drag_over();
        source.file_drop(1.0, 2.0, vec!["/a".to_string()]);

        assert_eq!(rx.recv().await, Some(DragEvent::Over));
        match rx.recv().await {
            Some(DragEvent::Drop(event)) => {
                assert_eq!((event.x, event.y), (1.0, 2.0));
                assert_eq!(event.paths, vec!["/a".to_string()]);
            }
            other => panic!("expected drop event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_events_flow() {
        let mut bridge = HostBridge::new();
        let sender = bridge.host_events();
        let mut rx = bridge.take_backend_events().unwrap();

        sender.message(Message::new("/a").with_note(Note::new(Variant::Success, "ok")));
        sender.config_changed(AppConfig { on_top: true });

        assert!(matches!(rx.recv().await, Some(BackendEvent::Message(_))));
        assert_eq!(
            rx.recv().await,
            Some(BackendEvent::ConfigChanged(AppConfig { on_top: true }))
        );
    }

    #[test]
    fn test_receivers_take_once() {
        let mut bridge = HostBridge::new();
        assert!(bridge.take_backend_events().is_some());
        assert!(bridge.take_backend_events().is_none());
        assert!(bridge.take_drag_events().is_some());
        assert!(bridge.take_drag_events().is_none());
    }

    #[test]
    fn test_send_after_teardown_is_silent() {
        let mut bridge = HostBridge::new();
        let source = bridge.drag_source();
        drop(bridge.take_drag_events());

        // Receiver gone: sends must not panic
        source.file_drop(0.0, 0.0, vec!["/a".to_string()]);
        source.drag_over();
    }
}
