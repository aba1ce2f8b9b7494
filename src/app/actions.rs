//! Imperative handles exposed to the render layer.

use super::types::{DropOperation, ZoneDrop};
use super::App;
use crate::drop::{DropZone, RectAccessor, ZoneId};
use crate::models::AppConfig;

impl App {
    /// Register a drop zone bound to a backend operation.
    ///
    /// The zone's callback only enqueues the accepted paths; the app loop
    /// inserts the batch divider, hides the transient zones, and hands the
    /// paths to the backend. Returns the identity to pass to
    /// [`unregister_zone`](Self::unregister_zone) on unmount.
    pub fn register_operation_zone(&mut self, op: DropOperation, rect: RectAccessor) -> ZoneId {
        let id = ZoneId::new();
        let tx = self.zone_tx.clone();
        self.drop_zones.register(DropZone::new(
            id,
            rect,
            Box::new(move |paths| {
                let _ = tx.send(ZoneDrop {
                    op,
                    paths: paths.to_vec(),
                });
            }),
        ));
        tracing::debug!(zone = %id, op = op.as_str(), "operation zone registered");
        id
    }

    /// Unregister a drop zone on region unmount.
    pub fn unregister_zone(&mut self, id: ZoneId) {
        self.drop_zones.unregister(id);
    }

    /// Toggle the on-top preference.
    ///
    /// Writes the flipped value through the configuration store; the
    /// in-memory value only changes when the host echoes the write back as
    /// a configuration-changed event. A failed write changes nothing.
    pub async fn toggle_on_top(&mut self) {
        let next = AppConfig {
            on_top: !self.config.on_top,
        };
        match self.config_store.save(&next).await {
            Ok(()) => {
                tracing::debug!(on_top = next.on_top, "configuration written, awaiting echo");
            }
            Err(err) => {
                tracing::warn!("failed to save configuration: {err}");
            }
        }
    }

    /// Clear the result log, dividers included.
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.mark_dirty();
    }
}
