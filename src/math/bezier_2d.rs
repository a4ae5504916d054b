//! 2D cubic Bézier utilities.
//!
//! A cubic segment is given by its anchors `p0`, `p3` and control points
//! `p1`, `p2`:
//!
//! `B(t) = (1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`

use super::{distance, Point2};

/// Evaluates a cubic Bézier at parameter `t` in Bernstein form.
///
/// `t` is not clamped; values slightly outside `[0, 1]` extrapolate the
/// polynomial.
#[must_use]
pub fn cubic_point_at(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2, t: f64) -> Point2 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    let b0 = mt3;
    let b1 = 3.0 * mt2 * t;
    let b2 = 3.0 * mt * t2;
    let b3 = t3;

    Point2::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// Approximates the arc length of a cubic Bézier by a polyline through
/// `divisions + 1` evenly spaced parameter values (both ends included).
///
/// Returns `0.0` when `divisions` is zero.
#[must_use]
pub fn cubic_polyline_length(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    divisions: u32,
) -> f64 {
    if divisions == 0 {
        return 0.0;
    }

    let n = f64::from(divisions);
    let mut prev = *p0;
    let mut length = 0.0;
    for i in 1..=divisions {
        let t = f64::from(i) / n;
        let next = cubic_point_at(p0, p1, p2, p3, t);
        length += distance(&prev, &next);
        prev = next;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn straight() -> [Point2; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ]
    }

    #[test]
    fn endpoints_are_anchors() {
        let [a, b, c, d] = [
            Point2::new(1.0, 2.0),
            Point2::new(5.0, -3.0),
            Point2::new(-2.0, 8.0),
            Point2::new(7.0, 7.0),
        ];
        let start = cubic_point_at(&a, &b, &c, &d, 0.0);
        let end = cubic_point_at(&a, &b, &c, &d, 1.0);
        assert_abs_diff_eq!(start, a, epsilon = 1e-12);
        assert_abs_diff_eq!(end, d, epsilon = 1e-12);
    }

    #[test]
    fn evenly_spaced_controls_move_linearly() {
        let [a, b, c, d] = straight();
        let mid = cubic_point_at(&a, &b, &c, &d, 0.25);
        assert_abs_diff_eq!(mid.x, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(mid.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn straight_length_is_exact() {
        let [a, b, c, d] = straight();
        let len = cubic_polyline_length(&a, &b, &c, &d, 10);
        assert_abs_diff_eq!(len, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_divisions_gives_zero_length() {
        let [a, b, c, d] = straight();
        assert!(cubic_polyline_length(&a, &b, &c, &d, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn overshoot_does_not_panic() {
        let [a, b, c, d] = straight();
        let p = cubic_point_at(&a, &b, &c, &d, 1.01);
        assert!(p.x > 3.0);
    }
}
