use thiserror::Error;

/// Rejected [`EngineParams`](crate::EngineParams).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("scroll speed must be finite and positive, got {0}")]
    InvalidScrollSpeed(f64),
    #[error("screen height must be finite and positive, got {0}")]
    InvalidScreenHeight(f64),
    #[error("frequency range must satisfy 0 < min < max, got {min}..{max}")]
    InvalidFrequencyRange { min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrokeError {
    #[error("a stroke needs at least one point")]
    Empty,
}
