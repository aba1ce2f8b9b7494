//! Drop zone registry.
//!
//! The render layer registers drop zones as it mounts them and unregisters
//! them as they unmount. Each zone is a (rectangle accessor, callback) pair:
//! the registry pulls the current rectangle at the moment of dispatch rather
//! than caching geometry, so a zone that moved or resized since registration
//! is still resolved against where it is now.

use uuid::Uuid;

use super::proximity::{point_to_rect_proximity, DropRect};
use super::DropEvent;

/// Stable identity for a registered drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(Uuid);

impl ZoneId {
    /// Allocate a fresh identity. One per mounted region, reused across
    /// re-registrations of the same region.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ZoneId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Supplies a zone's current rectangle, or `None` while the region has no
/// usable geometry (e.g. mid-layout).
pub type RectAccessor = Box<dyn Fn() -> Option<DropRect> + Send>;

/// Receives the dropped paths when a zone is hit.
pub type DropCallback = Box<dyn FnMut(&[String]) + Send>;

/// A registered drop target: identity, live rectangle, paths callback.
pub struct DropZone {
    id: ZoneId,
    rect: RectAccessor,
    on_drop: DropCallback,
}

impl DropZone {
    /// Create a zone descriptor for registration.
    pub fn new(id: ZoneId, rect: RectAccessor, on_drop: DropCallback) -> Self {
        Self { id, rect, on_drop }
    }

    /// The zone's identity.
    pub fn id(&self) -> ZoneId {
        self.id
    }
}

impl std::fmt::Debug for DropZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropZone").field("id", &self.id).finish()
    }
}

/// Registry of live drop zones.
///
/// Zones keep registration order; when regions overlap, the first-registered
/// zone containing the drop point wins. Order-based resolution avoids any
/// need for z-order or precedence metadata.
#[derive(Debug, Default)]
pub struct DropZoneRegistry {
    zones: Vec<DropZone>,
}

impl DropZoneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { zones: Vec::new() }
    }

    /// Register a zone, replacing any existing entry with the same identity.
    ///
    /// The (re-)registered zone always lands at the end of the iteration
    /// order.
    pub fn register(&mut self, zone: DropZone) {
        self.zones.retain(|z| z.id != zone.id);
        tracing::debug!(zone = %zone.id, total = self.zones.len() + 1, "drop zone registered");
        self.zones.push(zone);
    }

    /// Remove a zone; no-op when the identity is not registered.
    pub fn unregister(&mut self, id: ZoneId) {
        let before = self.zones.len();
        self.zones.retain(|z| z.id != id);
        if self.zones.len() != before {
            tracing::debug!(zone = %id, "drop zone unregistered");
        }
    }

    /// Route one drop event to at most one zone.
    ///
    /// Iterates in registration order and invokes the callback of the first
    /// zone whose current rectangle contains the drop point exactly
    /// (proximity zero - no tolerance, no nearest-zone fallback). Returns
    /// the identity of the zone that fired, or `None` when the event missed
    /// every zone and was dropped silently.
    pub fn resolve_and_dispatch(&mut self, event: &DropEvent) -> Option<ZoneId> {
        for zone in &mut self.zones {
            let Some(rect) = (zone.rect)() else {
                continue;
            };
            if point_to_rect_proximity(event.x, event.y, &rect) == 0.0 {
                tracing::debug!(
                    zone = %zone.id,
                    x = event.x,
                    y = event.y,
                    paths = event.paths.len(),
                    "drop resolved"
                );
                (zone.on_drop)(&event.paths);
                return Some(zone.id);
            }
        }
        tracing::debug!(x = event.x, y = event.y, "drop missed all zones");
        None
    }

    /// Number of registered zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the registry has no zones.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
