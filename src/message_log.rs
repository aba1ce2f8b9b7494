//! The in-memory result log.
//!
//! Messages arrive from the backend stream and are shown newest-first.
//! Dividers visually separate batches (one drop's worth of results) and are
//! never doubled up. Nothing here persists; the log lives and dies with the
//! UI session.

use crate::models::Message;

/// One entry in the log: a result message or a batch divider.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    Message(Message),
    Divider,
}

/// Ordered, prepend-only log of messages and dividers, newest first.
#[derive(Debug, Default)]
pub struct MessageStore {
    entries: Vec<LogEntry>,
    received: u64,
}

impl MessageStore {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a message (it becomes the newest entry).
    pub fn append(&mut self, message: Message) {
        self.received += 1;
        self.entries.insert(0, LogEntry::Message(message));
    }

    /// Prepend a divider, unless the log is empty or the newest entry is
    /// already a divider. Calling this repeatedly without an intervening
    /// [`append`](Self::append) leaves a single divider at the head.
    pub fn insert_divider(&mut self) {
        if self.entries.is_empty() || matches!(self.entries.first(), Some(LogEntry::Divider)) {
            return;
        }
        self.entries.insert(0, LogEntry::Divider);
    }

    /// Empty the log, dividers included.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of entries currently in the log (messages + dividers).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total messages ever appended, across clears. The render layer uses
    /// this for stable list keys.
    pub fn received_count(&self) -> u64 {
        self.received
    }
}
