use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{HexColor, PercentPoint};
use crate::error::{MoodError, MoodResult};

/// How a 0..=100 alpha percentage becomes the two-digit suffix of `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaEncoding {
    /// Percentage written as two decimal digits, clamped to `00..=99`.
    ///
    /// `8` becomes `08`, `100` becomes `99`. The digits are still read as hex
    /// by browsers, so `99` is roughly 60% opacity.
    #[default]
    DecimalDigits,
    /// Percentage scaled to a true `00..=FF` alpha byte.
    HexByte,
}

impl AlphaEncoding {
    #[must_use]
    pub fn suffix(self, alpha_percent: u8) -> String {
        match self {
            Self::DecimalDigits => format!("{:02}", alpha_percent.min(99)),
            Self::HexByte => {
                let byte = (f64::from(alpha_percent.min(100)) / 100.0 * 255.0 + 0.5).floor();
                // byte is within 0..=255 after the clamp above
                format!("{:02X}", byte as u8)
            }
        }
    }
}

/// Paint of one gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopPaint {
    Solid { color: HexColor },
    Tinted { color: HexColor, alpha_percent: u8 },
    Transparent,
}

/// One color stop placed at `offset_percent` along the gradient line/ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub paint: StopPaint,
    pub offset_percent: f64,
}

impl ColorStop {
    #[must_use]
    pub const fn solid(color: HexColor, offset_percent: f64) -> Self {
        Self {
            paint: StopPaint::Solid { color },
            offset_percent,
        }
    }

    #[must_use]
    pub const fn tinted(color: HexColor, alpha_percent: u8, offset_percent: f64) -> Self {
        Self {
            paint: StopPaint::Tinted {
                color,
                alpha_percent,
            },
            offset_percent,
        }
    }

    #[must_use]
    pub const fn transparent(offset_percent: f64) -> Self {
        Self {
            paint: StopPaint::Transparent,
            offset_percent,
        }
    }

    pub fn validate(self) -> MoodResult<()> {
        if !self.offset_percent.is_finite() || self.offset_percent < 0.0 {
            return Err(MoodError::InvalidData(
                "color stop offset must be finite and >= 0".to_owned(),
            ));
        }
        if let StopPaint::Tinted { alpha_percent, .. } = self.paint {
            if alpha_percent > 100 {
                return Err(MoodError::InvalidData(
                    "color stop alpha must be <= 100".to_owned(),
                ));
            }
        }
        Ok(())
    }

    fn write_css(self, out: &mut String, encoding: AlphaEncoding) {
        match self.paint {
            StopPaint::Solid { color } => {
                let _ = write!(out, "{color}");
            }
            StopPaint::Tinted {
                color,
                alpha_percent,
            } => {
                let _ = write!(out, "{color}{}", encoding.suffix(alpha_percent));
            }
            StopPaint::Transparent => out.push_str("transparent"),
        }
        let _ = write!(out, " {}%", format_css_number(self.offset_percent));
    }
}

pub type ColorStops = SmallVec<[ColorStop; 5]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialShape {
    Circle,
    Ellipse,
}

/// Where a radial gradient is centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RadialPosition {
    /// No `at` clause; the element center is implied.
    Implicit,
    /// Explicit `at center`.
    Center,
    /// `at X% Y%` in container percent.
    At { point: PercentPoint },
}

/// One gradient image of a (possibly layered) CSS background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GradientLayer {
    Linear {
        angle_deg: f64,
        stops: ColorStops,
    },
    Radial {
        shape: RadialShape,
        position: RadialPosition,
        stops: ColorStops,
    },
}

impl GradientLayer {
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        }
    }

    pub fn validate(&self) -> MoodResult<()> {
        if self.stops().len() < 2 {
            return Err(MoodError::InvalidData(
                "gradient needs at least two color stops".to_owned(),
            ));
        }
        if let Self::Linear { angle_deg, .. } = self {
            if !angle_deg.is_finite() {
                return Err(MoodError::InvalidData(
                    "linear gradient angle must be finite".to_owned(),
                ));
            }
        }
        if let Self::Radial {
            position: RadialPosition::At { point },
            ..
        } = self
        {
            if !point.is_finite() {
                return Err(MoodError::InvalidData(
                    "radial gradient center must be finite".to_owned(),
                ));
            }
        }
        for stop in self.stops() {
            stop.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn to_css(&self, encoding: AlphaEncoding) -> String {
        let mut out = String::with_capacity(128);
        match self {
            Self::Linear { angle_deg, .. } => {
                let _ = write!(out, "linear-gradient({}deg", format_css_number(*angle_deg));
            }
            Self::Radial {
                shape, position, ..
            } => {
                out.push_str("radial-gradient(");
                out.push_str(match shape {
                    RadialShape::Circle => "circle",
                    RadialShape::Ellipse => "ellipse",
                });
                match position {
                    RadialPosition::Implicit => {}
                    RadialPosition::Center => out.push_str(" at center"),
                    RadialPosition::At { point } => {
                        let _ = write!(
                            out,
                            " at {}% {}%",
                            format_css_number(point.x),
                            format_css_number(point.y)
                        );
                    }
                }
            }
        }
        for stop in self.stops() {
            out.push_str(", ");
            stop.write_css(&mut out, encoding);
        }
        out.push(')');
        out
    }
}

/// Layered background, serialized in list order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Background {
    pub layers: Vec<GradientLayer>,
}

impl Background {
    #[must_use]
    pub fn new(layers: Vec<GradientLayer>) -> Self {
        Self { layers }
    }

    pub fn validate(&self) -> MoodResult<()> {
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    /// CSS `background` value with layers joined by `", "`.
    #[must_use]
    pub fn to_css(&self, encoding: AlphaEncoding) -> String {
        self.layers
            .iter()
            .map(|layer| layer.to_css(encoding))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Formats a CSS number with at most four decimals and no trailing zeros.
#[must_use]
pub fn format_css_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 10_000.0).round() / 10_000.0;
    let mut text = format!("{rounded:.4}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}
