//! Recording backend for tests.
//!
//! Records every invocation, and can optionally emit a canned result
//! message per path on the host event stream, which is enough to exercise
//! the full drop-to-log flow without a real backend.

use std::sync::{Arc, Mutex};

use crate::host::HostEventSender;
use crate::models::{Message, Note, Variant};
use crate::traits::Backend;

/// One recorded backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Init(Vec<String>),
    Fix(Vec<String>),
}

/// In-memory [`Backend`] that records calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    calls: Arc<Mutex<Vec<BackendCall>>>,
    events: Option<HostEventSender>,
}

impl RecordingBackend {
    /// Backend that only records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that also emits a success message per path, like the real
    /// backend's result stream.
    pub fn with_events(events: HostEventSender) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            events: Some(events),
        }
    }

    /// Everything invoked so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    fn emit_results(&self, paths: &[String], text: &str) {
        if let Some(events) = &self.events {
            for path in paths {
                events.message(
                    Message::new(path.clone())
                        .with_icon("file")
                        .with_note(Note::new(Variant::Success, text)),
                );
            }
        }
    }
}

impl Backend for RecordingBackend {
    fn init_paths(&self, paths: Vec<String>) {
        self.emit_results(&paths, "Manager initialized.");
        self.calls.lock().unwrap().push(BackendCall::Init(paths));
    }

    fn fix_paths(&self, paths: Vec<String>) {
        self.emit_results(&paths, "Fixed for release.");
        self.calls.lock().unwrap().push(BackendCall::Fix(paths));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{BackendEvent, HostBridge};

    #[test]
    fn test_records_in_order() {
        let backend = RecordingBackend::new();
        backend.init_paths(vec!["/a".to_string()]);
        backend.fix_paths(vec!["/b".to_string(), "/c".to_string()]);

        assert_eq!(
            backend.calls(),
            vec![
                BackendCall::Init(vec!["/a".to_string()]),
                BackendCall::Fix(vec!["/b".to_string(), "/c".to_string()]),
            ]
        );
    }

    #[tokio::test]
    async fn test_emits_one_message_per_path() {
        let mut bridge = HostBridge::new();
        let mut rx = bridge.take_backend_events().unwrap();
        let backend = RecordingBackend::with_events(bridge.host_events());

        backend.init_paths(vec!["/a".to_string(), "/b".to_string()]);

        for expected in ["/a", "/b"] {
            match rx.recv().await {
                Some(BackendEvent::Message(msg)) => {
                    assert_eq!(msg.title, expected);
                    assert_eq!(msg.notes[0].variant, Variant::Success);
                }
                other => panic!("expected message, got {:?}", other),
            }
        }
    }
}
