pub mod extended_point;

pub use extended_point::{Angle, ExtendedPoint, PointWithAngle};
