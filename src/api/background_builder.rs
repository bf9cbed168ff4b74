use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::trace;

use crate::core::primitives::{clamp_finite, dominant_index, lerp, round_half_up};
use crate::core::{EllipseLayout, EmotionEntry, HexColor, PercentPoint, emotion_positions};
use crate::error::{MoodError, MoodResult};
use crate::render::{Background, ColorStop, GradientLayer, RadialPosition, RadialShape};

/// Alpha range (percent) interpolated by intensity for one gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityBand {
    pub min: f64,
    pub max: f64,
}

impl OpacityBand {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn alpha_at(self, ratio: f64) -> u8 {
        clamp_percent(round_half_up(lerp(self.min, self.max, ratio)))
    }
}

/// Linear intensity ramp `base + ratio * span`, rounded to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityRamp {
    pub base: f64,
    pub span: f64,
}

impl IntensityRamp {
    #[must_use]
    pub const fn new(base: f64, span: f64) -> Self {
        Self { base, span }
    }

    fn at(self, ratio: f64) -> f64 {
        round_half_up(self.base + ratio * self.span)
    }
}

/// Tuning for the container background gradients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub neutral_angle_deg: f64,
    pub neutral_start: HexColor,
    pub neutral_end: HexColor,
    /// Stop offsets of the single-emotion radial gradient.
    pub single_emotion_offsets: [f64; 4],
    /// Alpha bands of the single-emotion gradient, center outward.
    pub single_emotion_bands: [OpacityBand; 4],
    /// Radius (percent) at which an emotion's glow reaches its outer stop.
    pub spread: IntensityRamp,
    /// Alpha (percent) of an emotion's center stop.
    pub opacity: IntensityRamp,
    /// Extra radius (percent) until the glow becomes fully transparent.
    pub falloff: IntensityRamp,
    pub mid_opacity_ratio: f64,
    pub inner_stop_ratio: f64,
    pub outer_opacity_ratio: f64,
    /// Alphas of the dominant-color base layer at 0/50/100%.
    pub base_alphas: [u8; 3],
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            neutral_angle_deg: 135.0,
            neutral_start: HexColor::NEUTRAL,
            neutral_end: HexColor::NEUTRAL_DARK,
            single_emotion_offsets: [0.0, 35.0, 70.0, 100.0],
            single_emotion_bands: [
                OpacityBand::new(25.0, 85.0),
                OpacityBand::new(20.0, 60.0),
                OpacityBand::new(15.0, 35.0),
                OpacityBand::new(8.0, 15.0),
            ],
            spread: IntensityRamp::new(30.0, 50.0),
            opacity: IntensityRamp::new(50.0, 50.0),
            falloff: IntensityRamp::new(10.0, 15.0),
            mid_opacity_ratio: 0.75,
            inner_stop_ratio: 0.6,
            outer_opacity_ratio: 0.5,
            base_alphas: [8, 15, 25],
        }
    }
}

impl GradientConfig {
    pub(crate) fn validate(self) -> MoodResult<Self> {
        if !self.neutral_angle_deg.is_finite() {
            return Err(MoodError::InvalidConfig(
                "neutral gradient angle must be finite".to_owned(),
            ));
        }
        for offset in self.single_emotion_offsets {
            if !offset.is_finite() || !(0.0..=100.0).contains(&offset) {
                return Err(MoodError::InvalidConfig(
                    "single-emotion stop offsets must be in [0, 100]".to_owned(),
                ));
            }
        }
        for band in self.single_emotion_bands {
            if !band.min.is_finite()
                || !band.max.is_finite()
                || band.min < 0.0
                || band.max > 100.0
                || band.min > band.max
            {
                return Err(MoodError::InvalidConfig(
                    "opacity bands must satisfy 0 <= min <= max <= 100".to_owned(),
                ));
            }
        }
        for (ramp, name) in [
            (self.spread, "spread"),
            (self.opacity, "opacity"),
            (self.falloff, "falloff"),
        ] {
            if !ramp.base.is_finite()
                || !ramp.span.is_finite()
                || ramp.base < 0.0
                || ramp.span < 0.0
            {
                return Err(MoodError::InvalidConfig(format!(
                    "gradient `{name}` ramp must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [
            (self.mid_opacity_ratio, "mid_opacity_ratio"),
            (self.inner_stop_ratio, "inner_stop_ratio"),
            (self.outer_opacity_ratio, "outer_opacity_ratio"),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(MoodError::InvalidConfig(format!(
                    "gradient `{name}` must be in [0, 1]"
                )));
            }
        }
        if self.base_alphas.iter().any(|alpha| *alpha > 100) {
            return Err(MoodError::InvalidConfig(
                "base alphas must be <= 100".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Builds the container background for `entries`.
///
/// - no entries, or a leading "No Data" placeholder: flat neutral linear gradient
/// - one entry: concentric radial gradient at the center
/// - several entries: a dominant-color base layer followed by one radial
///   glow per entry, centered on that entry's position
#[must_use]
pub fn build_background(
    entries: &[EmotionEntry],
    ellipse: EllipseLayout,
    config: &GradientConfig,
) -> Background {
    match entries {
        [] => neutral_background(config),
        [first, ..] if first.is_no_data() => neutral_background(config),
        [single] => Background::new(vec![single_emotion_layer(single, config)]),
        _ => multi_emotion_background(entries, ellipse, config),
    }
}

/// Background used when there is nothing to visualize.
#[must_use]
pub fn neutral_background(config: &GradientConfig) -> Background {
    Background::new(vec![GradientLayer::Linear {
        angle_deg: config.neutral_angle_deg,
        stops: smallvec![
            ColorStop::solid(config.neutral_start, 0.0),
            ColorStop::solid(config.neutral_end, 100.0),
        ],
    }])
}

fn single_emotion_layer(entry: &EmotionEntry, config: &GradientConfig) -> GradientLayer {
    let ratio = entry.intensity_ratio();
    let color = entry.color();
    let stops = config
        .single_emotion_bands
        .iter()
        .zip(config.single_emotion_offsets)
        .map(|(band, offset)| ColorStop::tinted(color, band.alpha_at(ratio), offset))
        .collect();

    GradientLayer::Radial {
        shape: RadialShape::Circle,
        position: RadialPosition::Center,
        stops,
    }
}

fn multi_emotion_background(
    entries: &[EmotionEntry],
    ellipse: EllipseLayout,
    config: &GradientConfig,
) -> Background {
    let positions = emotion_positions(entries.len(), ellipse);
    let mut layers = Vec::with_capacity(entries.len() + 1);

    if let Some(dominant) = dominant_index(entries).and_then(|idx| entries.get(idx)) {
        let color = dominant.color();
        let [inner, middle, outer] = config.base_alphas;
        layers.push(GradientLayer::Radial {
            shape: RadialShape::Ellipse,
            position: RadialPosition::Center,
            stops: smallvec![
                ColorStop::tinted(color, inner, 0.0),
                ColorStop::tinted(color, middle, 50.0),
                ColorStop::tinted(color, outer, 100.0),
            ],
        });
    }

    layers.extend(
        entries
            .iter()
            .zip(positions)
            .map(|(entry, point)| emotion_glow_layer(entry, point, config)),
    );

    trace!(layers = layers.len(), "built multi-emotion background");
    Background::new(layers)
}

fn emotion_glow_layer(
    entry: &EmotionEntry,
    point: PercentPoint,
    config: &GradientConfig,
) -> GradientLayer {
    let ratio = entry.intensity_ratio();
    let color = entry.color();

    let spread = config.spread.at(ratio);
    let opacity = config.opacity.at(ratio);
    let mid_opacity = round_half_up(opacity * config.mid_opacity_ratio);
    let falloff = config.falloff.at(ratio);

    GradientLayer::Radial {
        shape: RadialShape::Circle,
        position: RadialPosition::At { point },
        stops: smallvec![
            ColorStop::tinted(color, clamp_percent(opacity), 0.0),
            ColorStop::tinted(
                color,
                clamp_percent(mid_opacity),
                spread * config.inner_stop_ratio
            ),
            ColorStop::tinted(
                color,
                clamp_percent(round_half_up(mid_opacity * config.outer_opacity_ratio)),
                spread
            ),
            ColorStop::transparent(spread + falloff),
        ],
    }
}

fn clamp_percent(value: f64) -> u8 {
    // clamped into 0..=100 so the cast is lossless
    clamp_finite(value, 0.0, 100.0, 0.0) as u8
}
