use crate::geometry::ExtendedPoint;
use crate::math::{distance, Point2};

use super::ShapeCalculator;

/// A straight segment between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSegment {
    pub start: Point2,
    pub end: Point2,
}

impl LinearSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the point at `t`: `start + (end - start) * t`.
    #[must_use]
    pub fn lerp(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    /// Returns the direction angle from `start` to `end`, in radians.
    #[must_use]
    pub fn direction_angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }
}

/// Straight lines between consecutive waypoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearShape;

impl ShapeCalculator for LinearShape {
    type Segment = LinearSegment;
    type Extra = ();

    fn length(&self, segment: &LinearSegment) -> f64 {
        distance(&segment.start, &segment.end)
    }

    fn segment(&self, waypoints: &[Point2]) -> Vec<LinearSegment> {
        waypoints
            .windows(2)
            .map(|w| LinearSegment::new(w[0], w[1]))
            .collect()
    }

    fn point_at(&self, segment: &LinearSegment, local_t: f64) -> ExtendedPoint {
        ExtendedPoint::plain(segment.lerp(local_t))
    }
}
