mod kind;

pub use kind::{PathKind, UnknownPathKind};

use crate::error::Result;
use crate::geometry::{Angle, ExtendedPoint};
use crate::math::Point2;
use crate::sampler::{ArcLengthSampler, SamplerBuilder};
use crate::shape::{
    LinearSegment, LinearShape, LinearWithAngle, ShapeCalculator, SplineConfig, SplineSegment,
    SplineShape, SplineWithAngle, SplineWithAngleConfig,
};

/// Options shared by every path kind. Kinds ignore the fields they do not use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathConfig {
    /// Spline tension.
    pub tension: f64,
    /// Spline length approximation resolution.
    pub segments: u32,
    /// Finite-difference step for spline tangent angles.
    pub angle_precision: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        let spline = SplineWithAngleConfig::default();
        Self {
            tension: spline.spline.tension,
            segments: spline.spline.segments,
            angle_precision: spline.angle_precision,
        }
    }
}

impl PathConfig {
    fn spline(&self) -> SplineConfig {
        SplineConfig {
            tension: self.tension,
            segments: self.segments,
        }
    }

    fn spline_with_angle(&self) -> SplineWithAngleConfig {
        SplineWithAngleConfig {
            spline: self.spline(),
            angle_precision: self.angle_precision,
        }
    }
}

/// A point returned by a [`PathSampler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    pub position: Point2,
    /// Tangent angle in radians, present for the angle-reporting kinds.
    pub angle: Option<f64>,
}

impl From<ExtendedPoint> for SampledPoint {
    fn from(point: ExtendedPoint) -> Self {
        Self {
            position: *point.position(),
            angle: None,
        }
    }
}

impl From<ExtendedPoint<Angle>> for SampledPoint {
    fn from(point: ExtendedPoint<Angle>) -> Self {
        let (position, Angle { angle }) = point.into_parts();
        Self {
            position,
            angle: Some(angle),
        }
    }
}

/// Raw segment geometry, for drawing guide lines under a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentGuide {
    Line(LinearSegment),
    Cubic(SplineSegment),
}

#[derive(Debug, Clone)]
enum BuilderKind {
    Linear(SamplerBuilder<LinearShape>),
    Spline(SamplerBuilder<SplineShape>),
    LinearWithAngle(SamplerBuilder<LinearWithAngle>),
    SplineWithAngle(SamplerBuilder<SplineWithAngle>),
}

/// Builds samplers for a path kind chosen at runtime.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    inner: BuilderKind,
}

impl PathBuilder {
    /// Creates a builder for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid for a spline kind.
    pub fn new(kind: PathKind, config: PathConfig) -> Result<Self> {
        let inner = match kind {
            PathKind::Linear => BuilderKind::Linear(SamplerBuilder::linear()),
            PathKind::Spline => BuilderKind::Spline(SamplerBuilder::spline(config.spline())?),
            PathKind::LinearWithAngle => {
                BuilderKind::LinearWithAngle(SamplerBuilder::linear_with_angle())
            }
            PathKind::SplineWithAngle => BuilderKind::SplineWithAngle(
                SamplerBuilder::spline_with_angle(config.spline_with_angle())?,
            ),
        };
        Ok(Self { inner })
    }

    /// Returns the path kind.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        match self.inner {
            BuilderKind::Linear(_) => PathKind::Linear,
            BuilderKind::Spline(_) => PathKind::Spline,
            BuilderKind::LinearWithAngle(_) => PathKind::LinearWithAngle,
            BuilderKind::SplineWithAngle(_) => PathKind::SplineWithAngle,
        }
    }

    /// Builds a sampler for `waypoints`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two waypoints are given.
    pub fn build(&self, waypoints: &[Point2]) -> Result<PathSampler> {
        let inner = match &self.inner {
            BuilderKind::Linear(b) => SamplerKind::Linear(b.build(waypoints)?),
            BuilderKind::Spline(b) => SamplerKind::Spline(b.build(waypoints)?),
            BuilderKind::LinearWithAngle(b) => SamplerKind::LinearWithAngle(b.build(waypoints)?),
            BuilderKind::SplineWithAngle(b) => SamplerKind::SplineWithAngle(b.build(waypoints)?),
        };
        Ok(PathSampler { inner })
    }

    /// Returns the segment geometry for `waypoints` without building a sampler.
    #[must_use]
    pub fn guides(&self, waypoints: &[Point2]) -> Vec<SegmentGuide> {
        match &self.inner {
            BuilderKind::Linear(b) => lines(b.shape().segment(waypoints)),
            BuilderKind::LinearWithAngle(b) => lines(b.shape().segment(waypoints)),
            BuilderKind::Spline(b) => cubics(b.shape().segment(waypoints)),
            BuilderKind::SplineWithAngle(b) => cubics(b.shape().segment(waypoints)),
        }
    }
}

fn lines(segments: Vec<LinearSegment>) -> Vec<SegmentGuide> {
    segments.into_iter().map(SegmentGuide::Line).collect()
}

fn cubics(segments: Vec<SplineSegment>) -> Vec<SegmentGuide> {
    segments.into_iter().map(SegmentGuide::Cubic).collect()
}

#[derive(Debug, Clone)]
enum SamplerKind {
    Linear(ArcLengthSampler<LinearShape>),
    Spline(ArcLengthSampler<SplineShape>),
    LinearWithAngle(ArcLengthSampler<LinearWithAngle>),
    SplineWithAngle(ArcLengthSampler<SplineWithAngle>),
}

/// An arc-length sampler whose kind was chosen at runtime.
#[derive(Debug, Clone)]
pub struct PathSampler {
    inner: SamplerKind,
}

impl PathSampler {
    /// Returns the point at progress `t`, or `None` when `t` is outside `[0, 1]`.
    #[must_use]
    pub fn query(&self, t: f64) -> Option<SampledPoint> {
        match &self.inner {
            SamplerKind::Linear(s) => s.query(t).map(Into::into),
            SamplerKind::Spline(s) => s.query(t).map(Into::into),
            SamplerKind::LinearWithAngle(s) => s.query(t).map(Into::into),
            SamplerKind::SplineWithAngle(s) => s.query(t).map(Into::into),
        }
    }

    /// Returns `count` points at evenly spaced progress values from 0 to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is less than 2.
    pub fn sample_uniform(&self, count: u32) -> Result<Vec<SampledPoint>> {
        Ok(match &self.inner {
            SamplerKind::Linear(s) => convert(s.sample_uniform(count)?),
            SamplerKind::Spline(s) => convert(s.sample_uniform(count)?),
            SamplerKind::LinearWithAngle(s) => convert(s.sample_uniform(count)?),
            SamplerKind::SplineWithAngle(s) => convert(s.sample_uniform(count)?),
        })
    }

    /// Returns the total path length.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        match &self.inner {
            SamplerKind::Linear(s) => s.total_length(),
            SamplerKind::Spline(s) => s.total_length(),
            SamplerKind::LinearWithAngle(s) => s.total_length(),
            SamplerKind::SplineWithAngle(s) => s.total_length(),
        }
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        match &self.inner {
            SamplerKind::Linear(s) => s.segment_count(),
            SamplerKind::Spline(s) => s.segment_count(),
            SamplerKind::LinearWithAngle(s) => s.segment_count(),
            SamplerKind::SplineWithAngle(s) => s.segment_count(),
        }
    }
}

fn convert<E>(points: Vec<ExtendedPoint<E>>) -> Vec<SampledPoint>
where
    SampledPoint: From<ExtendedPoint<E>>,
{
    points.into_iter().map(SampledPoint::from).collect()
}
