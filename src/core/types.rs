use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

/// Label carried by the placeholder entry shown when a journal has no emotions.
pub const NO_DATA_LABEL: &str = "No Data";

/// Opaque sRGB color, always formatted as `#RRGGBB`.
///
/// Alpha is never stored here; gradient stops append it at render time
/// according to the configured `AlphaEncoding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    /// Neutral gray used for the placeholder entry and unknown colors.
    pub const NEUTRAL: Self = Self::rgb(0x9C, 0xA3, 0xAF);
    /// Darker gray closing the no-data background gradient.
    pub const NEUTRAL_DARK: Self = Self::rgb(0x6B, 0x72, 0x80);

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#RRGGBB`, `RRGGBB` or the short `#RGB` form.
    pub fn parse(input: &str) -> MoodResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MoodError::InvalidColor(input.to_owned()));
        }

        match digits.len() {
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&digits[range], 16)
                        .map_err(|_| MoodError::InvalidColor(input.to_owned()))
                };
                Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = ch
                        .to_digit(16)
                        .ok_or_else(|| MoodError::InvalidColor(input.to_owned()))?;
                    // nibble < 16, so the product fits in a byte
                    *slot = (nibble * 17) as u8;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            _ => Err(MoodError::InvalidColor(input.to_owned())),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for HexColor {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = MoodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// One labeled emotion intensity, the unit of input for the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EmotionEntryFields")]
pub struct EmotionEntry {
    label: String,
    intensity: u8,
    color: HexColor,
}

#[derive(Deserialize)]
struct EmotionEntryFields {
    label: String,
    intensity: u8,
    color: HexColor,
}

impl TryFrom<EmotionEntryFields> for EmotionEntry {
    type Error = MoodError;

    fn try_from(fields: EmotionEntryFields) -> Result<Self, Self::Error> {
        Self::new(fields.label, fields.intensity, fields.color)
    }
}

impl EmotionEntry {
    pub const MAX_INTENSITY: u8 = 100;

    pub fn new(label: impl Into<String>, intensity: u8, color: HexColor) -> MoodResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(MoodError::InvalidEmotion(
                "label must not be empty".to_owned(),
            ));
        }
        if intensity > Self::MAX_INTENSITY {
            return Err(MoodError::InvalidEmotion(format!(
                "intensity of `{label}` must be <= 100, got {intensity}"
            )));
        }
        Ok(Self {
            label,
            intensity,
            color,
        })
    }

    /// Placeholder entry used when no emotion data exists.
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            label: NO_DATA_LABEL.to_owned(),
            intensity: 0,
            color: HexColor::NEUTRAL,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    #[must_use]
    pub fn color(&self) -> HexColor {
        self.color
    }

    /// Intensity as a ratio in `[0, 1]`.
    #[must_use]
    pub fn intensity_ratio(&self) -> f64 {
        f64::from(self.intensity) / f64::from(Self::MAX_INTENSITY)
    }

    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.label == NO_DATA_LABEL
    }
}

/// Position inside the chart container, both axes in percent of the container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    pub const CENTER: Self = Self::new(50.0, 50.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Per-emotion visual sizing.
///
/// Diameters are in CSS pixels, font scales in `rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleMetrics {
    pub circle_diameter: f64,
    pub glow_diameter: f64,
    pub percent_font_scale: f64,
    pub label_font_scale: f64,
}
