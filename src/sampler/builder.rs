use crate::error::Result;
use crate::math::Point2;
use crate::shape::{
    LinearShape, LinearWithAngle, ShapeCalculator, SplineConfig, SplineShape, SplineWithAngle,
    SplineWithAngleConfig,
};

use super::ArcLengthSampler;

/// Builds arc-length samplers for a configured shape.
///
/// The configuration is checked once when the builder is created; the
/// builder can then produce samplers for any number of waypoint lists.
#[derive(Debug, Clone)]
pub struct SamplerBuilder<S> {
    shape: S,
}

impl<S: ShapeCalculator + Clone> SamplerBuilder<S> {
    /// Creates a builder for an already constructed shape.
    #[must_use]
    pub fn new(shape: S) -> Self {
        Self { shape }
    }

    /// Returns the shape used by built samplers.
    #[must_use]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Builds a sampler for `waypoints`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two waypoints are given.
    pub fn build(&self, waypoints: &[Point2]) -> Result<ArcLengthSampler<S>> {
        ArcLengthSampler::new(self.shape.clone(), waypoints)
    }
}

impl SamplerBuilder<LinearShape> {
    /// Straight segments between waypoints.
    #[must_use]
    pub fn linear() -> Self {
        Self::new(LinearShape)
    }
}

impl SamplerBuilder<LinearWithAngle> {
    /// Straight segments, reporting the segment direction.
    #[must_use]
    pub fn linear_with_angle() -> Self {
        Self::new(LinearWithAngle::new())
    }
}

impl SamplerBuilder<SplineShape> {
    /// Cubic spline through the waypoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn spline(config: SplineConfig) -> Result<Self> {
        Ok(Self::new(SplineShape::new(config)?))
    }
}

impl SamplerBuilder<SplineWithAngle> {
    /// Cubic spline through the waypoints, reporting an estimated tangent
    /// angle.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn spline_with_angle(config: SplineWithAngleConfig) -> Result<Self> {
        Ok(Self::new(SplineWithAngle::new(config)?))
    }
}
