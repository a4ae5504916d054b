mod arc_length;
mod builder;

pub use arc_length::ArcLengthSampler;
pub use builder::SamplerBuilder;
