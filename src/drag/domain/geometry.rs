//! Pointer position and drop-zone bounds.

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl PointerPosition {
    /// Creates a pointer position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding rectangle of a drop zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneBounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl ZoneBounds {
    /// Creates bounds from edge coordinates.
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns `true` when the pointer lies on or inside the edges.
    ///
    /// Leave events fire when the pointer crosses into a child element too,
    /// so a pointer still within these bounds has not left the zone.
    #[must_use]
    pub fn contains(&self, pointer: PointerPosition) -> bool {
        pointer.x >= self.left
            && pointer.x <= self.right
            && pointer.y >= self.top
            && pointer.y <= self.bottom
    }
}
