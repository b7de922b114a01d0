use thiserror::Error;

/// Rejected tuning values. Defaults never produce these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be in (0, 1), got {value}")]
    SmoothingOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be in [0.85, 0.98), got {value}")]
    DampingOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be in [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{low_name} ({low}) must not exceed {high_name} ({high})")]
    InvertedRange {
        low_name: &'static str,
        low: f32,
        high_name: &'static str,
        high: f32,
    },
}
