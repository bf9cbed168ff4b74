use serde::{Deserialize, Serialize};

use crate::core::primitives::{average_other_intensity, clamp_finite, lerp};
use crate::core::types::{CircleMetrics, EmotionEntry};
use crate::error::{MoodError, MoodResult};

/// Tuning for circle, glow and label sizing.
///
/// Circle sizes are CSS pixels; font scales are `rem`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    pub min_circle_px: f64,
    pub max_circle_px: f64,
    /// Hard cap applied after crowding and co-occurrence growth.
    pub circle_cap_px: f64,
    /// Growth per emotion in the chart.
    pub crowding_step: f64,
    pub crowding_cap: f64,
    /// Weight of the other emotions' mean intensity on circle growth.
    pub co_occurrence_weight: f64,
    pub glow: GlowConfig,
    pub percent_font_divisor: f64,
    pub percent_font_min_rem: f64,
    pub label_font_divisor: f64,
    pub label_font_min_rem: f64,
}

/// Glow multiplier terms; the glow diameter is `circle * multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub base: f64,
    pub crowding_step: f64,
    pub crowding_cap: f64,
    pub intensity_weight: f64,
    pub co_occurrence_weight: f64,
    pub multiplier_cap: f64,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            base: 0.1,
            crowding_step: 0.5,
            crowding_cap: 2.0,
            intensity_weight: 1.5,
            co_occurrence_weight: 1.0,
            multiplier_cap: 6.5,
        }
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            min_circle_px: 100.0,
            max_circle_px: 160.0,
            circle_cap_px: 200.0,
            crowding_step: 0.15,
            crowding_cap: 0.5,
            co_occurrence_weight: 0.3,
            glow: GlowConfig::default(),
            percent_font_divisor: 100.0,
            percent_font_min_rem: 0.4,
            label_font_divisor: 120.0,
            label_font_min_rem: 0.3,
        }
    }
}

impl SizingConfig {
    pub(crate) fn validate(self) -> MoodResult<Self> {
        for (value, name) in [
            (self.min_circle_px, "min_circle_px"),
            (self.max_circle_px, "max_circle_px"),
            (self.circle_cap_px, "circle_cap_px"),
            (self.percent_font_divisor, "percent_font_divisor"),
            (self.label_font_divisor, "label_font_divisor"),
            (self.glow.multiplier_cap, "glow.multiplier_cap"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MoodError::InvalidConfig(format!(
                    "sizing `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.crowding_step, "crowding_step"),
            (self.crowding_cap, "crowding_cap"),
            (self.co_occurrence_weight, "co_occurrence_weight"),
            (self.percent_font_min_rem, "percent_font_min_rem"),
            (self.label_font_min_rem, "label_font_min_rem"),
            (self.glow.base, "glow.base"),
            (self.glow.crowding_step, "glow.crowding_step"),
            (self.glow.crowding_cap, "glow.crowding_cap"),
            (self.glow.intensity_weight, "glow.intensity_weight"),
            (self.glow.co_occurrence_weight, "glow.co_occurrence_weight"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MoodError::InvalidConfig(format!(
                    "sizing `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.min_circle_px > self.max_circle_px || self.max_circle_px > self.circle_cap_px {
            return Err(MoodError::InvalidConfig(
                "circle sizes must satisfy min <= max <= cap".to_owned(),
            ));
        }
        if self.glow.base > self.glow.multiplier_cap {
            return Err(MoodError::InvalidConfig(
                "glow base must be <= glow multiplier_cap".to_owned(),
            ));
        }
        if !(self.circle_cap_px * self.glow.multiplier_cap).is_finite() {
            return Err(MoodError::InvalidConfig(
                "circle_cap_px * glow.multiplier_cap must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Sizing for the emotion at `index` given every emotion in the chart.
///
/// Returns minimum sizing when `index` is out of range.
#[must_use]
pub fn circle_metrics(
    entries: &[EmotionEntry],
    index: usize,
    config: &SizingConfig,
) -> CircleMetrics {
    let count = entries.len() as f64;
    let own_ratio = entries.get(index).map_or(0.0, EmotionEntry::intensity_ratio);
    let others_ratio = average_other_intensity(entries, index) / 100.0;

    let base = lerp(config.min_circle_px, config.max_circle_px, own_ratio);
    let size_factor = 1.0
        + (count * config.crowding_step).min(config.crowding_cap)
        + others_ratio * config.co_occurrence_weight;
    let circle_diameter = clamp_finite(
        base * size_factor,
        config.min_circle_px,
        config.circle_cap_px,
        config.min_circle_px,
    );

    let glow = config.glow;
    let glow_factor = glow.base
        + (count * glow.crowding_step).min(glow.crowding_cap)
        + own_ratio * glow.intensity_weight
        + others_ratio * glow.co_occurrence_weight;
    let glow_factor = clamp_finite(glow_factor, glow.base, glow.multiplier_cap, glow.base);

    let min_glow = circle_diameter * glow.base;
    let glow_diameter = clamp_finite(
        circle_diameter * glow_factor,
        min_glow,
        circle_diameter * glow.multiplier_cap,
        min_glow,
    );

    CircleMetrics {
        circle_diameter,
        glow_diameter,
        percent_font_scale: (circle_diameter / config.percent_font_divisor)
            .max(config.percent_font_min_rem),
        label_font_scale: (circle_diameter / config.label_font_divisor)
            .max(config.label_font_min_rem),
    }
}

/// Sizing for every emotion, index-aligned with `entries`.
#[must_use]
pub fn all_circle_metrics(entries: &[EmotionEntry], config: &SizingConfig) -> Vec<CircleMetrics> {
    (0..entries.len())
        .map(|index| circle_metrics(entries, index, config))
        .collect()
}
