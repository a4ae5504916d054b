use crate::math::Point2;

/// A point on a path together with an extra attribute set.
///
/// The attribute set is `()` for plain positions and [`Angle`] when the
/// tangent direction is reported alongside the position. Values are only
/// produced by shape calculators and are never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedPoint<E = ()> {
    position: Point2,
    extra: E,
}

/// A point with its tangent angle.
pub type PointWithAngle = ExtendedPoint<Angle>;

/// Tangent direction of travel, in radians, measured counter-clockwise from
/// the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub angle: f64,
}

impl ExtendedPoint<()> {
    /// Creates a point with no extra attributes.
    #[must_use]
    pub fn plain(position: Point2) -> Self {
        Self {
            position,
            extra: (),
        }
    }
}

impl ExtendedPoint<Angle> {
    /// Creates a point carrying a tangent angle.
    #[must_use]
    pub fn with_angle(position: Point2, angle: f64) -> Self {
        Self {
            position,
            extra: Angle { angle },
        }
    }

    /// Returns the tangent angle, in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.extra.angle
    }
}

impl<E> ExtendedPoint<E> {
    /// Creates a point with the given attribute set.
    #[must_use]
    pub fn new(position: Point2, extra: E) -> Self {
        Self { position, extra }
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.position
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Returns the attribute set.
    #[must_use]
    pub fn extra(&self) -> &E {
        &self.extra
    }

    /// Replaces the attribute set, keeping the position.
    #[must_use]
    pub fn map_extra<F, T>(self, f: F) -> ExtendedPoint<T>
    where
        F: FnOnce(E) -> T,
    {
        ExtendedPoint {
            position: self.position,
            extra: f(self.extra),
        }
    }

    /// Splits into position and attribute set.
    #[must_use]
    pub fn into_parts(self) -> (Point2, E) {
        (self.position, self.extra)
    }
}

impl From<Point2> for ExtendedPoint<()> {
    fn from(position: Point2) -> Self {
        Self::plain(position)
    }
}
