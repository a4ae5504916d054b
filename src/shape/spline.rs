use crate::error::{ConfigError, Result};
use crate::geometry::ExtendedPoint;
use crate::math::bezier_2d::{cubic_point_at, cubic_polyline_length};
use crate::math::Point2;

use super::ShapeCalculator;

/// Parameters controlling the spline shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineConfig {
    /// Scale of the control-point offsets. `0` gives straight chords,
    /// larger values overshoot more.
    pub tension: f64,
    /// Number of polyline pieces used to approximate each segment's length.
    pub segments: u32,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            tension: 1.0,
            segments: 50,
        }
    }
}

impl SplineConfig {
    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero or `tension` is not finite.
    pub fn validate(&self) -> Result<()> {
        if self.segments == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "segments",
                value: 0.0,
                reason: "length approximation needs at least one piece",
            }
            .into());
        }
        if !self.tension.is_finite() {
            return Err(ConfigError::InvalidParameter {
                parameter: "tension",
                value: self.tension,
                reason: "must be finite",
            }
            .into());
        }
        Ok(())
    }
}

/// One cubic Bézier piece of a spline, anchored at `p1` and `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSegment {
    pub p1: Point2,
    pub p2: Point2,
    pub cp1: Point2,
    pub cp2: Point2,
}

impl SplineSegment {
    /// Evaluates the segment at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        cubic_point_at(&self.p1, &self.cp1, &self.cp2, &self.p2, t)
    }
}

/// Smooth cubic curve threaded through every waypoint.
///
/// Control points follow the Catmull-Rom tangent estimate
/// `(next - previous) / 6`, scaled by the tension. The first and last
/// waypoints are duplicated so the end segments have both neighbors.
#[derive(Debug, Clone, Copy)]
pub struct SplineShape {
    config: SplineConfig,
}

impl SplineShape {
    /// Creates a new spline shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SplineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SplineConfig {
        &self.config
    }
}

impl ShapeCalculator for SplineShape {
    type Segment = SplineSegment;
    type Extra = ();

    fn length(&self, segment: &SplineSegment) -> f64 {
        cubic_polyline_length(
            &segment.p1,
            &segment.cp1,
            &segment.cp2,
            &segment.p2,
            self.config.segments,
        )
    }

    fn segment(&self, waypoints: &[Point2]) -> Vec<SplineSegment> {
        let n = waypoints.len();
        if n < 2 {
            return Vec::new();
        }

        let k = self.config.tension / 6.0;
        (0..n - 1)
            .map(|i| {
                let previous = waypoints[i.saturating_sub(1)];
                let current = waypoints[i];
                let next = waypoints[i + 1];
                let next_next = waypoints[(i + 2).min(n - 1)];

                SplineSegment {
                    p1: current,
                    p2: next,
                    cp1: current + (next - previous) * k,
                    cp2: next - (next_next - current) * k,
                }
            })
            .collect()
    }

    fn point_at(&self, segment: &SplineSegment, local_t: f64) -> ExtendedPoint {
        ExtendedPoint::plain(segment.point_at(local_t))
    }
}
