use crate::error::check_non_negative;
use crate::{ConfigError, IndicatorStyle};

/// Configuration for [`crate::Carousel`].
///
/// This is a plain value: adapters can clone it, tweak a few fields through the `with_*`
/// setters, and hand it back via `Carousel::set_config`. Every constructor that accepts a
/// config runs [`CarouselConfig::validate`] first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    /// Upper bound for the adaptive card size.
    pub max_height: f32,
    /// Lower bound for the adaptive card size. Must be positive.
    pub min_height: f32,
    /// Fraction of the card size used as the base spacing between neighbouring items.
    pub spacing_multiplier: f32,
    /// Maximum scale falloff per card unit of distance from the focal position.
    pub scale_reduction: f32,
    /// Maximum 3D tilt around the vertical axis, in degrees.
    pub rotation_angle_degrees: f32,
    /// Fraction of the spacing a drag must travel to commit a page change.
    pub drag_commit_fraction: f32,
    /// Fling speed (px/s, measured as predicted minus actual translation) that forces a
    /// page change regardless of drag distance.
    pub velocity_threshold: f32,
    /// Page indicator appearance. `None` disables the indicator.
    pub indicator_style: Option<IndicatorStyle>,
    /// Vertical gap between the card strip and the indicator row. Applied through
    /// [`crate::Layout::indicator_top`].
    pub indicator_spacing: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            max_height: 250.0,
            min_height: 100.0,
            spacing_multiplier: 0.78,
            scale_reduction: 0.49,
            rotation_angle_degrees: 15.0,
            drag_commit_fraction: 0.5,
            velocity_threshold: 400.0,
            indicator_style: Some(IndicatorStyle::default()),
            indicator_spacing: 8.0,
        }
    }
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the configuration invariants.
    ///
    /// - every field is finite
    /// - `min_height > 0` and `min_height <= max_height`
    /// - multipliers, thresholds and angles are non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_height.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "min_height",
            });
        }
        if !self.max_height.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "max_height",
            });
        }
        if self.min_height <= 0.0 {
            return Err(ConfigError::NonPositiveMinHeight(self.min_height));
        }
        if self.min_height > self.max_height {
            return Err(ConfigError::InvertedHeightBounds {
                min_height: self.min_height,
                max_height: self.max_height,
            });
        }

        check_non_negative("spacing_multiplier", self.spacing_multiplier)?;
        check_non_negative("scale_reduction", self.scale_reduction)?;
        check_non_negative("rotation_angle_degrees", self.rotation_angle_degrees)?;
        check_non_negative("drag_commit_fraction", self.drag_commit_fraction)?;
        check_non_negative("velocity_threshold", self.velocity_threshold)?;
        check_non_negative("indicator_spacing", self.indicator_spacing)?;

        if let Some(style) = &self.indicator_style {
            style.validate()?;
        }
        Ok(())
    }

    /// Clamps the available height into `[min_height, max_height]`.
    ///
    /// NaN and non-positive heights resolve to `min_height`.
    pub fn card_size(&self, available_height: f32) -> f32 {
        if available_height.is_nan() {
            return self.min_height;
        }
        available_height.min(self.max_height).max(self.min_height)
    }

    pub fn with_height_bounds(mut self, min_height: f32, max_height: f32) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    pub fn with_spacing_multiplier(mut self, spacing_multiplier: f32) -> Self {
        self.spacing_multiplier = spacing_multiplier;
        self
    }

    pub fn with_scale_reduction(mut self, scale_reduction: f32) -> Self {
        self.scale_reduction = scale_reduction;
        self
    }

    pub fn with_rotation_angle_degrees(mut self, degrees: f32) -> Self {
        self.rotation_angle_degrees = degrees;
        self
    }

    pub fn with_drag_commit_fraction(mut self, fraction: f32) -> Self {
        self.drag_commit_fraction = fraction;
        self
    }

    pub fn with_velocity_threshold(mut self, velocity_threshold: f32) -> Self {
        self.velocity_threshold = velocity_threshold;
        self
    }

    pub fn with_indicator_style(mut self, style: Option<IndicatorStyle>) -> Self {
        self.indicator_style = style;
        self
    }

    pub fn with_indicator_spacing(mut self, spacing: f32) -> Self {
        self.indicator_spacing = spacing;
        self
    }
}
