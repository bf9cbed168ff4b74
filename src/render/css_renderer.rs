use serde::{Deserialize, Serialize};

use crate::core::HexColor;
use crate::error::{MoodError, MoodResult};
use crate::render::{
    AlphaEncoding, ColorStop, ColorStops, EmotionCircle, GradientLayer, MoodFrame, RadialPosition,
    RadialShape, Renderer, format_css_number,
};

/// One tinted stop of a per-circle gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlphaStop {
    pub alpha_percent: u8,
    pub offset_percent: f64,
}

const fn alpha_stop(alpha_percent: u8, offset_percent: f64) -> AlphaStop {
    AlphaStop {
        alpha_percent,
        offset_percent,
    }
}

/// Gradients painted inside and around each emotion bubble.
///
/// Every ramp fades to transparent at 100%.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStyle {
    pub glow: [AlphaStop; 4],
    pub body: [AlphaStop; 4],
    pub body_hover: [AlphaStop; 4],
    /// Subtracted from both label font sizes.
    pub font_inset_rem: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            glow: [
                alpha_stop(60, 0.0),
                alpha_stop(40, 30.0),
                alpha_stop(25, 50.0),
                alpha_stop(15, 70.0),
            ],
            body: [
                alpha_stop(70, 0.0),
                alpha_stop(60, 50.0),
                alpha_stop(40, 75.0),
                alpha_stop(20, 90.0),
            ],
            body_hover: [
                alpha_stop(80, 0.0),
                alpha_stop(70, 50.0),
                alpha_stop(50, 75.0),
                alpha_stop(30, 90.0),
            ],
            font_inset_rem: 0.01,
        }
    }
}

impl CircleStyle {
    fn validate(self) -> MoodResult<Self> {
        for stop in self.glow.iter().chain(&self.body).chain(&self.body_hover) {
            if stop.alpha_percent > 100
                || !stop.offset_percent.is_finite()
                || !(0.0..=100.0).contains(&stop.offset_percent)
            {
                return Err(MoodError::InvalidConfig(
                    "circle style stops need alpha <= 100 and offsets in [0, 100]".to_owned(),
                ));
            }
        }
        if !self.font_inset_rem.is_finite() || self.font_inset_rem < 0.0 {
            return Err(MoodError::InvalidConfig(
                "circle style font inset must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    fn layer(ramp: &[AlphaStop; 4], color: HexColor) -> GradientLayer {
        let mut stops: ColorStops = ramp
            .iter()
            .map(|stop| ColorStop::tinted(color, stop.alpha_percent, stop.offset_percent))
            .collect();
        stops.push(ColorStop::transparent(100.0));
        GradientLayer::Radial {
            shape: RadialShape::Circle,
            position: RadialPosition::Implicit,
            stops,
        }
    }
}

/// CSS declarations for one emotion bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssCircle {
    pub label: String,
    pub percent_text: String,
    pub left: String,
    pub top: String,
    pub size: String,
    pub glow_size: String,
    pub glow_background: String,
    pub body_background: String,
    pub body_hover_background: String,
    pub percent_font_size: String,
    pub label_font_size: String,
}

/// CSS output for a whole chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CssChart {
    pub container_background: String,
    pub circles: Vec<CssCircle>,
}

impl CssChart {
    pub fn to_json_pretty(&self) -> MoodResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MoodError::InvalidData(format!("failed to serialize css chart: {e}")))
    }
}

/// Renderer that serializes frames into CSS strings.
///
/// The latest output is kept for the host to read back.
#[derive(Debug, Default)]
pub struct CssRenderer {
    style: CircleStyle,
    last_chart: Option<CssChart>,
}

impl CssRenderer {
    pub fn new(style: CircleStyle) -> MoodResult<Self> {
        Ok(Self {
            style: style.validate()?,
            last_chart: None,
        })
    }

    #[must_use]
    pub fn style(&self) -> CircleStyle {
        self.style
    }

    #[must_use]
    pub fn last_chart(&self) -> Option<&CssChart> {
        self.last_chart.as_ref()
    }

    #[must_use]
    pub fn take_last_chart(&mut self) -> Option<CssChart> {
        self.last_chart.take()
    }

    /// Converts a frame without storing it.
    pub fn to_css_chart(&self, frame: &MoodFrame) -> MoodResult<CssChart> {
        frame.validate()?;
        let encoding = frame.alpha_encoding;
        Ok(CssChart {
            container_background: frame.background.to_css(encoding),
            circles: frame
                .circles
                .iter()
                .map(|circle| self.css_circle(circle, encoding))
                .collect(),
        })
    }

    fn css_circle(&self, circle: &EmotionCircle, encoding: AlphaEncoding) -> CssCircle {
        let metrics = circle.metrics;
        let font_size = |scale: f64| {
            format!(
                "calc({}rem - {}rem)",
                format_css_number(scale),
                format_css_number(self.style.font_inset_rem)
            )
        };

        CssCircle {
            label: circle.label.clone(),
            percent_text: format!("{}%", circle.intensity),
            left: format!("{}%", format_css_number(circle.center.x)),
            top: format!("{}%", format_css_number(circle.center.y)),
            size: format!("{}px", format_css_number(metrics.circle_diameter)),
            glow_size: format!("{}px", format_css_number(metrics.glow_diameter)),
            glow_background: CircleStyle::layer(&self.style.glow, circle.color).to_css(encoding),
            body_background: CircleStyle::layer(&self.style.body, circle.color).to_css(encoding),
            body_hover_background: CircleStyle::layer(&self.style.body_hover, circle.color)
                .to_css(encoding),
            percent_font_size: font_size(metrics.percent_font_scale),
            label_font_size: font_size(metrics.label_font_scale),
        }
    }
}

impl Renderer for CssRenderer {
    fn render(&mut self, frame: &MoodFrame) -> MoodResult<()> {
        self.last_chart = Some(self.to_css_chart(frame)?);
        Ok(())
    }
}
