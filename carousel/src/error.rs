use thiserror::Error;

/// Reasons a [`crate::CarouselConfig`] is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_height must be positive, got {0}")]
    NonPositiveMinHeight(f32),
    #[error("min_height ({min_height}) must not exceed max_height ({max_height})")]
    InvertedHeightBounds { min_height: f32, max_height: f32 },
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}

pub(crate) fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
