//! Drop-target routing.
//!
//! The host shell delivers drag-and-drop at the window level only: one
//! cursor position and one set of paths per drop, with no per-element drop
//! support. This module routes each of those events to exactly one of the
//! drop zones the render layer has registered.
//!
//! - [`proximity`] - pure point-to-rectangle distance
//! - [`registry`] - ordered zone registry and dispatch
//! - [`dispatcher`] - the single subscription to the host drag stream

pub mod dispatcher;
pub mod proximity;
pub mod registry;

pub use dispatcher::{DropEventDispatcher, SubscribeError};
pub use proximity::{point_to_rect_proximity, DropRect};
pub use registry::{DropCallback, DropZone, DropZoneRegistry, RectAccessor, ZoneId};

/// A window-level file drop: cursor position plus the dropped paths.
///
/// Transient - consumed synchronously by dispatch, never stored. The host
/// guarantees `paths` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    /// Cursor x in window coordinates
    pub x: f64,
    /// Cursor y in window coordinates
    pub y: f64,
    /// Absolute paths of the dropped files/directories
    pub paths: Vec<String>,
}

/// A signal from the host drag-and-drop source.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// The cursor is dragging something over the window. Used only to toggle
    /// transient visibility of the drop zones, not part of routing.
    Over,
    /// Files were dropped.
    Drop(DropEvent),
}
