pub mod error;
pub mod geometry;
pub mod math;
pub mod path;
pub mod sampler;
pub mod shape;

pub use error::{PathError, Result};
pub use geometry::{Angle, ExtendedPoint, PointWithAngle};
pub use math::Point2;
pub use path::{PathBuilder, PathConfig, PathKind, PathSampler, SampledPoint, SegmentGuide};
pub use sampler::{ArcLengthSampler, SamplerBuilder};
pub use shape::ShapeCalculator;
