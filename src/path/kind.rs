use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, PathError};

/// The path shape variants selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Linear,
    Spline,
    LinearWithAngle,
    SplineWithAngle,
}

impl PathKind {
    /// All variants, in display order.
    pub const ALL: [PathKind; 4] = [
        PathKind::Linear,
        PathKind::Spline,
        PathKind::LinearWithAngle,
        PathKind::SplineWithAngle,
    ];

    /// Returns the canonical name of the variant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PathKind::Linear => "linear",
            PathKind::Spline => "spline",
            PathKind::LinearWithAngle => "linearWithAngle",
            PathKind::SplineWithAngle => "splineWithAngle",
        }
    }

    /// Returns whether sampled points carry a tangent angle.
    #[must_use]
    pub fn has_angle(self) -> bool {
        matches!(self, PathKind::LinearWithAngle | PathKind::SplineWithAngle)
    }

    /// Returns whether the path is a cubic spline.
    #[must_use]
    pub fn is_spline(self) -> bool {
        matches!(self, PathKind::Spline | PathKind::SplineWithAngle)
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name matches no [`PathKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path kind `{0}`, expected one of linear, spline, linearWithAngle, splineWithAngle")]
pub struct UnknownPathKind(pub String);

impl FromStr for PathKind {
    type Err = UnknownPathKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PathKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownPathKind(s.to_owned()))
    }
}

impl From<UnknownPathKind> for PathError {
    fn from(err: UnknownPathKind) -> Self {
        PathError::Config(ConfigError::UnknownKind(err.0))
    }
}
