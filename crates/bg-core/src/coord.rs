//! Planar coordinate type and distance utilities.
//!
//! The model works in **projected** coordinates (metres on a local grid,
//! e.g. a national grid projection applied upstream by the GIS loader), so
//! plain Euclidean distance is exact and cheap.  `f64` keeps the suitability
//! and attractiveness arithmetic free of accumulated rounding at city scale.

/// A projected planar coordinate in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between `self` and `other`.
    ///
    /// `t = 0.0` is `self`; `t = 1.0` is `other`.  Used to position an agent
    /// part-way along a road edge.
    #[inline]
    pub fn lerp(self, other: Coord, t: f64) -> Coord {
        Coord {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Cheap bounding-box rejection before an exact distance check.
    #[inline]
    pub fn within_bbox(self, center: Coord, half_m: f64) -> bool {
        (self.x - center.x).abs() <= half_m && (self.y - center.y).abs() <= half_m
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
