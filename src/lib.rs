//! Droppad front-end core.
//!
//! The interactive heart of a desktop utility whose window is a set of
//! named drop zones: drag files onto a zone, the matching backend operation
//! runs, and results stream back into a message log with per-note
//! severities. The host shell (window, webview, process lifecycle) and the
//! backend operations themselves are external collaborators reached through
//! [`host`] and [`traits`].

pub mod adapters;
pub mod app;
pub mod drop;
pub mod host;
pub mod message_log;
pub mod models;
pub mod severity;
pub mod traits;
