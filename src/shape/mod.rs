mod angle;
mod linear;
mod spline;

pub use angle::{LinearWithAngle, SplineWithAngle, SplineWithAngleConfig};
pub use linear::{LinearSegment, LinearShape};
pub use spline::{SplineConfig, SplineSegment, SplineShape};

use crate::geometry::ExtendedPoint;
use crate::math::Point2;

/// Trait for path shapes that can be walked by arc length.
///
/// A shape splits a waypoint list into segments, measures each segment, and
/// evaluates a point inside a segment at a local parameter in `[0, 1]`.
pub trait ShapeCalculator {
    /// Geometry describing one segment.
    type Segment;

    /// Attribute set attached to every evaluated point.
    type Extra;

    /// Returns the length of a single segment. Never negative.
    fn length(&self, segment: &Self::Segment) -> f64;

    /// Derives all segments from the waypoint list, in path order.
    ///
    /// Fewer than two waypoints yield no segments.
    fn segment(&self, waypoints: &[Point2]) -> Vec<Self::Segment>;

    /// Evaluates the shape at `local_t` within `segment`.
    ///
    /// Must not panic for a `local_t` slightly outside `[0, 1]`.
    fn point_at(&self, segment: &Self::Segment, local_t: f64) -> ExtendedPoint<Self::Extra>;
}
