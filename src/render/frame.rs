use serde::{Deserialize, Serialize};

use crate::core::{CircleMetrics, HexColor, PercentPoint};
use crate::error::{MoodError, MoodResult};
use crate::render::{AlphaEncoding, Background};

/// Draw command for one emotion bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCircle {
    pub label: String,
    pub intensity: u8,
    pub color: HexColor,
    pub center: PercentPoint,
    pub metrics: CircleMetrics,
}

impl EmotionCircle {
    pub fn validate(&self) -> MoodResult<()> {
        if self.label.is_empty() {
            return Err(MoodError::InvalidData(
                "emotion circle label must not be empty".to_owned(),
            ));
        }
        if !self.center.is_finite()
            || !(0.0..=100.0).contains(&self.center.x)
            || !(0.0..=100.0).contains(&self.center.y)
        {
            return Err(MoodError::InvalidData(
                "emotion circle center must be finite and inside the container".to_owned(),
            ));
        }
        let metrics = self.metrics;
        for (value, name) in [
            (metrics.circle_diameter, "circle_diameter"),
            (metrics.glow_diameter, "glow_diameter"),
            (metrics.percent_font_scale, "percent_font_scale"),
            (metrics.label_font_scale, "label_font_scale"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MoodError::InvalidData(format!(
                    "emotion circle `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one mood chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodFrame {
    pub background: Background,
    pub alpha_encoding: AlphaEncoding,
    /// Circles in list order; later circles stack above earlier ones.
    pub circles: Vec<EmotionCircle>,
}

impl MoodFrame {
    #[must_use]
    pub fn new(background: Background, alpha_encoding: AlphaEncoding) -> Self {
        Self {
            background,
            alpha_encoding,
            circles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_circle(mut self, circle: EmotionCircle) -> Self {
        self.circles.push(circle);
        self
    }

    pub fn validate(&self) -> MoodResult<()> {
        if self.background.layers.is_empty() {
            return Err(MoodError::InvalidData(
                "frame background must have at least one layer".to_owned(),
            ));
        }
        self.background.validate()?;
        for circle in &self.circles {
            circle.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}
