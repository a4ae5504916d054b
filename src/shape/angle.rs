use crate::error::{ConfigError, Result};
use crate::geometry::{Angle, PointWithAngle};
use crate::math::Point2;

use super::{LinearSegment, LinearShape, ShapeCalculator, SplineConfig, SplineSegment, SplineShape};

/// Linear shape that also reports the segment direction.
///
/// The angle is constant along a segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearWithAngle {
    base: LinearShape,
}

impl LinearWithAngle {
    /// Creates a new linear-with-angle shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeCalculator for LinearWithAngle {
    type Segment = LinearSegment;
    type Extra = Angle;

    fn length(&self, segment: &LinearSegment) -> f64 {
        self.base.length(segment)
    }

    fn segment(&self, waypoints: &[Point2]) -> Vec<LinearSegment> {
        self.base.segment(waypoints)
    }

    fn point_at(&self, segment: &LinearSegment, local_t: f64) -> PointWithAngle {
        let angle = segment.direction_angle();
        self.base
            .point_at(segment, local_t)
            .map_extra(|()| Angle { angle })
    }
}

/// Parameters for the spline shape with tangent estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineWithAngleConfig {
    pub spline: SplineConfig,
    /// Step in local parameter between the two samples of the finite
    /// difference.
    pub angle_precision: f64,
}

impl Default for SplineWithAngleConfig {
    fn default() -> Self {
        Self {
            spline: SplineConfig::default(),
            angle_precision: 0.01,
        }
    }
}

impl SplineWithAngleConfig {
    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the spline configuration is invalid or
    /// `angle_precision` is not in `(0, 1]`.
    pub fn validate(&self) -> Result<()> {
        self.spline.validate()?;
        if !(self.angle_precision > 0.0 && self.angle_precision <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "angle_precision",
                value: self.angle_precision,
                reason: "must be in (0, 1]",
            }
            .into());
        }
        Ok(())
    }
}

/// Spline shape that also reports an estimated tangent angle.
///
/// The angle comes from a finite difference between the point at `t` and a
/// probe `angle_precision` further along the segment. At the segment end
/// the probe looks backward, so the angle is the arrival direction.
#[derive(Debug, Clone, Copy)]
pub struct SplineWithAngle {
    base: SplineShape,
    angle_precision: f64,
}

impl SplineWithAngle {
    /// Creates a new spline-with-angle shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: SplineWithAngleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            base: SplineShape::new(config.spline)?,
            angle_precision: config.angle_precision,
        })
    }

    /// Returns the finite-difference step.
    #[must_use]
    pub fn angle_precision(&self) -> f64 {
        self.angle_precision
    }

    fn estimate_angle(&self, segment: &SplineSegment, local_t: f64, point: &Point2) -> f64 {
        let at_end = local_t >= 1.0;
        let probe_t = if at_end {
            local_t - self.angle_precision
        } else {
            local_t + self.angle_precision
        };
        let probe = *self.base.point_at(segment, probe_t.clamp(0.0, 1.0)).position();

        let (from, to) = if at_end {
            (&probe, point)
        } else {
            (point, &probe)
        };
        (to.y - from.y).atan2(to.x - from.x)
    }
}

impl ShapeCalculator for SplineWithAngle {
    type Segment = SplineSegment;
    type Extra = Angle;

    fn length(&self, segment: &SplineSegment) -> f64 {
        self.base.length(segment)
    }

    fn segment(&self, waypoints: &[Point2]) -> Vec<SplineSegment> {
        self.base.segment(waypoints)
    }

    fn point_at(&self, segment: &SplineSegment, local_t: f64) -> PointWithAngle {
        let point = self.base.point_at(segment, local_t);
        let angle = self.estimate_angle(segment, local_t, point.position());
        point.map_extra(|()| Angle { angle })
    }
}
