//! Event handlers for the app loop.
//!
//! Each handler runs to completion inside one loop turn and never blocks:
//! backend hand-offs are fire-and-forget, and zone callbacks enqueue
//! rather than mutate.

use std::time::Instant;

use super::types::ZoneDrop;
use super::{App, DropOperation, DRAG_OVER_HIDE};
use crate::drop::{DragEvent, DropEvent};
use crate::host::BackendEvent;

impl App {
    /// A signal from the host drag-and-drop source.
    pub fn handle_drag_event(&mut self, event: DragEvent) {
        match event {
            DragEvent::Over => self.handle_drag_over(),
            DragEvent::Drop(event) => self.handle_drop(event),
        }
    }

    /// Route a window-level drop through the registry.
    ///
    /// A miss is a defined outcome, already debug-logged by the registry.
    pub fn handle_drop(&mut self, event: DropEvent) {
        self.drop_zones.resolve_and_dispatch(&event);
    }

    /// A drag is hovering the window: show the drop zones and (re-)arm the
    /// hide deadline. The host sends these at hover-tick rate, so this has
    /// to stay cheap.
    pub fn handle_drag_over(&mut self) {
        if !self.dragged_over {
            self.dragged_over = true;
            self.mark_dirty();
        }
        self.drag_over_until = Some(Instant::now() + DRAG_OVER_HIDE);
    }

    /// Periodic housekeeping: hide the drop zones once the drag-over
    /// deadline expires without another hover tick.
    pub fn tick(&mut self) {
        if let Some(until) = self.drag_over_until {
            if Instant::now() >= until {
                self.dragged_over = false;
                self.drag_over_until = None;
                self.mark_dirty();
            }
        }
    }

    /// An event from the backend/host stream.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Message(message) => {
                tracing::debug!(title = %message.title, notes = message.notes.len(), "message received");
                self.log.append(message);
                self.mark_dirty();
            }
            BackendEvent::ConfigChanged(config) => {
                if config != self.config {
                    tracing::debug!(on_top = config.on_top, "configuration changed");
                    self.config = config;
                    self.mark_dirty();
                }
            }
        }
    }

    /// A drop accepted by an operation zone: separate the new batch from
    /// the previous one, drop the transient zone overlay, and hand the
    /// paths to the backend.
    pub(crate) fn handle_zone_drop(&mut self, cmd: ZoneDrop) {
        tracing::info!(op = cmd.op.as_str(), paths = cmd.paths.len(), "dispatching dropped paths");
        self.log.insert_divider();
        self.dragged_over = false;
        self.drag_over_until = None;
        self.mark_dirty();

        match cmd.op {
            DropOperation::Initialize => self.backend.init_paths(cmd.paths),
            DropOperation::Fix => self.backend.fix_paths(cmd.paths),
        }
    }
}
