//! Minimal lon/lat extent math shared by the catalog and the selection mode.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in `[lon, lat]` degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// South-west corner.
    pub min: [f64; 2],
    /// North-east corner.
    pub max: [f64; 2],
}

impl Extent {
    /// Build an extent from two corners in any order.
    pub fn new(a: [f64; 2], b: [f64; 2]) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1])],
            max: [a[0].max(b[0]), a[1].max(b[1])],
        }
    }

    /// The whole world.
    pub fn world() -> Self {
        Self::new([-180.0, -90.0], [180.0, 90.0])
    }

    /// Midpoint of the box.
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// True when the two boxes share any point, edges included.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min[0] <= other.max[0]
            && other.min[0] <= self.max[0]
            && self.min[1] <= other.max[1]
            && other.min[1] <= self.max[1]
    }

    pub fn contains(&self, point: [f64; 2]) -> bool {
        (self.min[0]..=self.max[0]).contains(&point[0])
            && (self.min[1]..=self.max[1]).contains(&point[1])
    }
}

/// Current map view as seen by refreshes and catalog queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub extent: Extent,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(extent: Extent, zoom: f64) -> Self {
        Self { extent, zoom }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Extent::world(), 2.0)
    }
}
