//! Canvas-space position type and the interpolation math the motion
//! scheduler needs.
//!
//! Positions are owned by the presentation layer (it places and drags nodes);
//! the engine only ever reads them to compute headings and per-tick
//! interpolated positions.  `f32` matches the sub-pixel precision a canvas
//! can actually display.

/// A 2-D position in presentation coordinates (x right, y down).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading from `self` towards `other`, in radians from the positive
    /// x-axis (`atan2(dy, dx)`).  With y pointing down, positive angles turn
    /// clockwise on screen.
    #[inline]
    pub fn heading_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Linear interpolation: `self` at `f = 0.0`, `other` at `f = 1.0`.
    ///
    /// `f` is not clamped; callers control the fraction.
    #[inline]
    pub fn lerp(self, other: Point, f: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * f,
            y: self.y + (other.y - self.y) * f,
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
