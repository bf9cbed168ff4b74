use serde::{Deserialize, Serialize};

use crate::core::{EllipseLayout, SizingConfig};
use crate::error::{MoodError, MoodResult};
use crate::render::AlphaEncoding;

use super::{GradientConfig, OpacityBand};

/// Layout and styling constants injected into the engine.
///
/// Serializable so hosts can keep chart theming in a config file instead of
/// hard-coding it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoodLayoutConfig {
    #[serde(default)]
    pub ellipse: EllipseLayout,
    #[serde(default)]
    pub sizing: SizingConfig,
    #[serde(default)]
    pub gradient: GradientConfig,
    #[serde(default)]
    pub alpha_encoding: AlphaEncoding,
}

impl MoodLayoutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the circle diameter range interpolated by intensity.
    #[must_use]
    pub fn with_circle_range(mut self, min_px: f64, max_px: f64) -> Self {
        self.sizing.min_circle_px = min_px;
        self.sizing.max_circle_px = max_px;
        self
    }

    /// Sets the hard cap applied to grown circle diameters.
    #[must_use]
    pub fn with_circle_cap(mut self, cap_px: f64) -> Self {
        self.sizing.circle_cap_px = cap_px;
        self
    }

    /// Sets the center-stop alpha range of the single-emotion background.
    #[must_use]
    pub fn with_opacity_range(mut self, min_opacity: f64, max_opacity: f64) -> Self {
        self.gradient.single_emotion_bands[0] = OpacityBand::new(min_opacity, max_opacity);
        self
    }

    /// Sets the radii of the placement ellipse.
    #[must_use]
    pub fn with_ellipse_radii(mut self, radius_x: f64, radius_y: f64) -> Self {
        self.ellipse.radius_x = radius_x;
        self.ellipse.radius_y = radius_y;
        self
    }

    #[must_use]
    pub fn with_alpha_encoding(mut self, encoding: AlphaEncoding) -> Self {
        self.alpha_encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_ellipse(mut self, ellipse: EllipseLayout) -> Self {
        self.ellipse = ellipse;
        self
    }

    #[must_use]
    pub fn with_sizing(mut self, sizing: SizingConfig) -> Self {
        self.sizing = sizing;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: GradientConfig) -> Self {
        self.gradient = gradient;
        self
    }

    #[must_use]
    pub fn min_opacity(&self) -> f64 {
        self.gradient.single_emotion_bands[0].min
    }

    #[must_use]
    pub fn max_opacity(&self) -> f64 {
        self.gradient.single_emotion_bands[0].max
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> MoodResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MoodError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> MoodResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| MoodError::InvalidConfig(format!("failed to parse config: {e}")))?;
        super::validation::validate_config(config)
    }
}
