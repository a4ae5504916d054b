use thiserror::Error;

/// Top-level error type for path sampling.
#[derive(Debug, Error)]
pub enum PathError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors caused by the waypoints or sample requests handed to a sampler.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("a path needs at least 2 waypoints, got {count}")]
    TooFewWaypoints { count: usize },

    #[error("uniform sampling needs at least 2 samples, got {count}")]
    TooFewSamples { count: u32 },

    #[error("shape produced no segments for the given waypoints")]
    NoSegments,
}

/// Errors related to shape configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown path kind: {0}")]
    UnknownKind(String),
}

/// Convenience type alias for results using [`PathError`].
pub type Result<T> = std::result::Result<T, PathError>;
