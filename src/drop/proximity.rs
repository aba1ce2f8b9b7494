//! Point-to-rectangle proximity.
//!
//! Drop routing treats a zone as hit only when the cursor's distance to its
//! rectangle is exactly zero, so this function has to be exact: no epsilon,
//! no rounding.

/// An axis-aligned rectangle in the cursor-event coordinate space.
///
/// Edges are the same scalars the host reports for cursor positions. Zones
/// supply their rectangle lazily at dispatch time, so values here are always
/// current-frame geometry, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DropRect {
    /// Create a rectangle from its four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Whether a point lands inside this rectangle under the routing rule.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        point_to_rect_proximity(x, y, self) == 0.0
    }
}

/// Distance from a point to a rectangle, 0 when the point is inside.
///
/// Per axis the overshoot is `max(left - x, x - right + 1, 0)`; the `+ 1`
/// on the upper bound makes the boundary pixel inclusive, matching how drop
/// coordinates are sampled at integer granularity. Axes combine with the
/// Euclidean norm, so a point past a corner gets the diagonal distance to
/// that corner.
pub fn point_to_rect_proximity(x: f64, y: f64, rect: &DropRect) -> f64 {
    let dx = (rect.left - x).max(x - rect.right + 1.0).max(0.0);
    let dy = (rect.top - y).max(y - rect.bottom + 1.0).max(0.0);
    (dx * dx + dy * dy).sqrt()
}
