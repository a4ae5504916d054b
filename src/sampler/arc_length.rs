use tracing::{debug, trace};

use crate::error::{InputError, Result};
use crate::geometry::ExtendedPoint;
use crate::math::Point2;
use crate::shape::ShapeCalculator;

/// Resolves progress along a path into points, by arc length.
///
/// Segment geometry and lengths are computed once in [`ArcLengthSampler::new`];
/// queries only walk the precomputed tables.
#[derive(Debug, Clone)]
pub struct ArcLengthSampler<S: ShapeCalculator> {
    shape: S,
    segments: Vec<S::Segment>,
    lengths: Vec<f64>,
    total_length: f64,
}

impl<S: ShapeCalculator> ArcLengthSampler<S> {
    /// Builds a sampler for `waypoints` using `shape`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two waypoints are given.
    pub fn new(shape: S, waypoints: &[Point2]) -> Result<Self> {
        if waypoints.len() < 2 {
            return Err(InputError::TooFewWaypoints {
                count: waypoints.len(),
            }
            .into());
        }

        let segments = shape.segment(waypoints);
        if segments.is_empty() {
            return Err(InputError::NoSegments.into());
        }
        let lengths: Vec<f64> = segments.iter().map(|s| shape.length(s)).collect();
        let total_length = lengths.iter().sum();

        debug!(
            waypoints = waypoints.len(),
            segments = segments.len(),
            total_length,
            "built arc-length sampler"
        );

        Ok(Self {
            shape,
            segments,
            lengths,
            total_length,
        })
    }

    /// Returns the point at progress `t`, or `None` when `t` is outside `[0, 1]`.
    ///
    /// A target exactly on a segment boundary resolves to the end of the
    /// earlier segment.
    #[must_use]
    pub fn query(&self, t: f64) -> Option<ExtendedPoint<S::Extra>> {
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        let (index, local_t) = self.locate(self.total_length * t);
        Some(self.shape.point_at(&self.segments[index], local_t))
    }

    /// Returns `count` points at evenly spaced progress values from 0 to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is less than 2.
    pub fn sample_uniform(&self, count: u32) -> Result<Vec<ExtendedPoint<S::Extra>>> {
        if count < 2 {
            return Err(InputError::TooFewSamples { count }.into());
        }

        let last = f64::from(count - 1);
        Ok((0..count)
            .filter_map(|i| self.query((f64::from(i) / last).min(1.0)))
            .collect())
    }

    /// Finds the segment index and local parameter for a distance from the
    /// path start.
    fn locate(&self, target: f64) -> (usize, f64) {
        let last = self.segments.len() - 1;
        let mut accumulated = 0.0;

        for (index, &length) in self.lengths.iter().enumerate() {
            // Zero-length segments never hold an interior point.
            if length > 0.0 && accumulated + length >= target {
                let ratio = ((target - accumulated) / length).clamp(0.0, 1.0);
                return (index, ratio);
            }
            accumulated += length;
        }

        trace!(target, accumulated, "target past accumulated length, using path end");
        (last, 1.0)
    }

    /// Returns the shape calculator.
    #[must_use]
    pub fn shape(&self) -> &S {
        &self.shape
    }

    /// Returns the precomputed segments, in path order.
    #[must_use]
    pub fn segments(&self) -> &[S::Segment] {
        &self.segments
    }

    /// Returns the length of each segment, parallel to [`Self::segments`].
    #[must_use]
    pub fn segment_lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the total path length.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PathError;
    use crate::shape::{LinearSegment, LinearShape, LinearWithAngle};
    use approx::assert_abs_diff_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn tables_are_parallel() {
        let s = ArcLengthSampler::new(LinearShape, &pts(&[(0.0, 0.0), (3.0, 4.0), (3.0, 10.0)]))
            .unwrap();
        assert_eq!(s.segment_count(), 2);
        assert_eq!(s.segment_lengths().len(), s.segments().len());
        assert_abs_diff_eq!(s.segment_lengths()[0], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.segment_lengths()[1], 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.total_length(), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn midpoint_of_single_segment() {
        let s = ArcLengthSampler::new(LinearShape, &pts(&[(0.0, 0.0), (10.0, 0.0)])).unwrap();
        let p = s.query(0.5).unwrap();
        assert_abs_diff_eq!(*p.position(), Point2::new(5.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn out_of_range_is_none() {
        let s = ArcLengthSampler::new(LinearShape, &pts(&[(0.0, 0.0), (10.0, 0.0)])).unwrap();
        assert!(s.query(-0.1).is_none());
        assert!(s.query(1.5).is_none());
        assert!(s.query(f64::NAN).is_none());
        assert!(s.query(0.0).is_some());
        assert!(s.query(1.0).is_some());
    }

    #[test]
    fn boundary_resolves_to_end_of_earlier_segment() {
        let s = ArcLengthSampler::new(
            LinearWithAngle::new(),
            &pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
        )
        .unwrap();
        let p = s.query(0.5).unwrap();
        assert_abs_diff_eq!(*p.position(), Point2::new(10.0, 0.0), epsilon = 1e-12);
        // The angle is that of the first (horizontal) segment.
        assert_abs_diff_eq!(p.angle(), 0.0, epsilon = 1e-12);
        assert_eq!(s.locate(10.0), (0, 1.0));
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let s = ArcLengthSampler::new(
            LinearWithAngle::new(),
            &pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 10.0), (0.0, 10.0)]),
        )
        .unwrap();
        let start = s.query(0.0).unwrap();
        assert_abs_diff_eq!(*start.position(), Point2::new(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(start.angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-12);

        let mid = s.query(0.5).unwrap();
        assert_abs_diff_eq!(*mid.position(), Point2::new(0.0, 5.0), epsilon = 1e-12);
    }

    #[test]
    fn all_coincident_waypoints_resolve_to_last_segment_end() {
        let s = ArcLengthSampler::new(LinearShape, &pts(&[(2.0, 3.0), (2.0, 3.0), (2.0, 3.0)]))
            .unwrap();
        assert!(s.total_length().abs() < f64::EPSILON);
        assert_eq!(s.locate(0.0), (1, 1.0));
        let p = s.query(0.3).unwrap();
        assert_abs_diff_eq!(*p.position(), Point2::new(2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn shortfall_falls_back_to_path_end() {
        let s = ArcLengthSampler::new(LinearShape, &pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]))
            .unwrap();
        assert_eq!(s.locate(2.0 + 1e-9), (1, 1.0));
    }

    #[test]
    fn too_few_waypoints() {
        for waypoints in [vec![], pts(&[(1.0, 1.0)])] {
            let err = ArcLengthSampler::new(LinearShape, &waypoints).unwrap_err();
            assert!(matches!(
                err,
                PathError::Input(InputError::TooFewWaypoints { count }) if count == waypoints.len()
            ));
        }
    }

    /// A shape that never yields segments.
    #[derive(Debug, Clone, Copy)]
    struct EmptyShape;

    impl ShapeCalculator for EmptyShape {
        type Segment = LinearSegment;
        type Extra = ();

        fn length(&self, segment: &LinearSegment) -> f64 {
            LinearShape.length(segment)
        }

        fn segment(&self, _waypoints: &[Point2]) -> Vec<LinearSegment> {
            Vec::new()
        }

        fn point_at(&self, segment: &LinearSegment, local_t: f64) -> ExtendedPoint {
            LinearShape.point_at(segment, local_t)
        }
    }

    #[test]
    fn shape_without_segments_is_rejected() {
        let err = ArcLengthSampler::new(EmptyShape, &pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)]))
            .unwrap_err();
        assert!(matches!(err, PathError::Input(InputError::NoSegments)));
    }

    #[test]
    fn queries_are_idempotent() {
        let s = ArcLengthSampler::new(
            LinearWithAngle::new(),
            &pts(&[(0.0, 0.0), (4.0, 1.0), (-2.0, 7.0)]),
        )
        .unwrap();
        for t in [0.0, 0.13, 0.5, 0.77, 1.0] {
            assert_eq!(s.query(t), s.query(t));
        }
    }

    #[test]
    fn sample_uniform_spans_path() {
        let s = ArcLengthSampler::new(LinearShape, &pts(&[(0.0, 0.0), (10.0, 0.0)])).unwrap();
        let samples = s.sample_uniform(5).unwrap();
        assert_eq!(samples.len(), 5);
        for (i, p) in samples.iter().enumerate() {
            assert_abs_diff_eq!(p.x(), 2.5 * i as f64, epsilon = 1e-12);
        }
        assert!(s.sample_uniform(1).is_err());
    }

    #[test]
    fn segments_match_shape_view() {
        let waypoints = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let s = ArcLengthSampler::new(LinearShape, &waypoints).unwrap();
        let expected: Vec<LinearSegment> = LinearShape.segment(&waypoints);
        assert_eq!(s.segments(), expected.as_slice());
    }
}
