use serde::{Deserialize, Serialize};

use crate::core::primitives::dominant_index;
use crate::core::{
    CircleMetrics, EmotionEntry, PercentPoint, all_circle_metrics, emotion_positions,
};
use crate::error::{MoodError, MoodResult};
use crate::render::Background;

use super::{MoodLayoutConfig, build_background};

/// Fully derived chart layout for one list of emotions.
///
/// `positions` and `sizes` are index-aligned with `entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLayout {
    pub entries: Vec<EmotionEntry>,
    pub positions: Vec<PercentPoint>,
    pub sizes: Vec<CircleMetrics>,
    pub background: Background,
    /// Index of the strongest emotion; `None` only for an empty chart.
    pub dominant: Option<usize>,
}

impl MoodLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn dominant_entry(&self) -> Option<&EmotionEntry> {
        self.dominant.and_then(|idx| self.entries.get(idx))
    }

    /// Checks that positions, sizes and `dominant` line up with `entries`.
    ///
    /// Layouts from `build_layout` always pass; this guards deserialized ones.
    pub fn validate(&self) -> MoodResult<()> {
        let count = self.entries.len();
        if self.positions.len() != count || self.sizes.len() != count {
            return Err(MoodError::InvalidData(format!(
                "layout has {count} entries but {} positions and {} sizes",
                self.positions.len(),
                self.sizes.len()
            )));
        }
        if self.dominant.is_some_and(|idx| idx >= count) {
            return Err(MoodError::InvalidData(
                "layout dominant index is out of range".to_owned(),
            ));
        }
        if self.positions.iter().any(|point| !point.is_finite()) {
            return Err(MoodError::InvalidData(
                "layout positions must be finite".to_owned(),
            ));
        }
        if self.sizes.iter().any(|size| {
            !size.circle_diameter.is_finite() || !size.glow_diameter.is_finite()
        }) {
            return Err(MoodError::InvalidData(
                "layout sizes must be finite".to_owned(),
            ));
        }
        self.background.validate()
    }

    /// Iterates `(entry, position, size)` in list order.
    pub fn iter(&self) -> impl Iterator<Item = (&EmotionEntry, PercentPoint, CircleMetrics)> {
        self.entries
            .iter()
            .zip(self.positions.iter().copied())
            .zip(self.sizes.iter().copied())
            .map(|((entry, position), size)| (entry, position, size))
    }
}

/// Computes the layout of `entries` under `config`.
///
/// Total for any input length; an empty list yields the neutral background
/// and no circles.
#[must_use]
pub fn build_layout(entries: &[EmotionEntry], config: &MoodLayoutConfig) -> MoodLayout {
    MoodLayout {
        entries: entries.to_vec(),
        positions: emotion_positions(entries.len(), config.ellipse),
        sizes: all_circle_metrics(entries, &config.sizing),
        background: build_background(entries, config.ellipse, &config.gradient),
        dominant: dominant_index(entries),
    }
}
