use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::EmotionEntry;

use super::{MoodLayout, MoodLayoutConfig};

/// Runtime metrics exposed by the engine's layout memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct LayoutCacheKey {
    entries_hash: u64,
    config_hash: u64,
}

impl LayoutCacheKey {
    pub(super) fn new(entries: &[EmotionEntry], config: &MoodLayoutConfig) -> Self {
        let mut hasher = DefaultHasher::new();
        entries.hash(&mut hasher);
        Self {
            entries_hash: hasher.finish(),
            config_hash: config_fingerprint(config),
        }
    }
}

/// Memo of computed layouts.
///
/// Keys are content hashes, so a hit is confirmed against the stored entries
/// and config before it is returned.
#[derive(Debug, Default)]
pub(super) struct LayoutCache {
    entries: HashMap<LayoutCacheKey, (MoodLayoutConfig, MoodLayout)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    const MAX_ENTRIES: usize = 64;

    pub(super) fn get(
        &mut self,
        key: LayoutCacheKey,
        input: &[EmotionEntry],
        config: &MoodLayoutConfig,
    ) -> Option<MoodLayout> {
        let value = self
            .entries
            .get(&key)
            .filter(|(stored_config, layout)| stored_config == config && layout.entries == input)
            .map(|(_, layout)| layout.clone());
        if value.is_some() {
            self.hits = self.hits.saturating_add(1);
        }
        value
    }

    pub(super) fn insert(
        &mut self,
        key: LayoutCacheKey,
        config: MoodLayoutConfig,
        value: MoodLayout,
    ) {
        self.misses = self.misses.saturating_add(1);
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.clear();
        }
        self.entries.insert(key, (config, value));
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> LayoutCacheStats {
        LayoutCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

fn config_fingerprint(config: &MoodLayoutConfig) -> u64 {
    let ellipse = config.ellipse;
    let sizing = config.sizing;
    let glow = sizing.glow;
    let gradient = config.gradient;

    let mut scalars = vec![
        ellipse.center_x,
        ellipse.center_y,
        ellipse.radius_x,
        ellipse.radius_y,
        ellipse.min_coordinate,
        ellipse.max_coordinate,
        sizing.min_circle_px,
        sizing.max_circle_px,
        sizing.circle_cap_px,
        sizing.crowding_step,
        sizing.crowding_cap,
        sizing.co_occurrence_weight,
        sizing.percent_font_divisor,
        sizing.percent_font_min_rem,
        sizing.label_font_divisor,
        sizing.label_font_min_rem,
        glow.base,
        glow.crowding_step,
        glow.crowding_cap,
        glow.intensity_weight,
        glow.co_occurrence_weight,
        glow.multiplier_cap,
        gradient.neutral_angle_deg,
        gradient.spread.base,
        gradient.spread.span,
        gradient.opacity.base,
        gradient.opacity.span,
        gradient.falloff.base,
        gradient.falloff.span,
        gradient.mid_opacity_ratio,
        gradient.inner_stop_ratio,
        gradient.outer_opacity_ratio,
    ];
    scalars.extend(gradient.single_emotion_offsets);
    scalars.extend(
        gradient
            .single_emotion_bands
            .iter()
            .flat_map(|band| [band.min, band.max]),
    );

    let mut hasher = DefaultHasher::new();
    for value in scalars {
        OrderedFloat(value).hash(&mut hasher);
    }
    gradient.neutral_start.hash(&mut hasher);
    gradient.neutral_end.hash(&mut hasher);
    gradient.base_alphas.hash(&mut hasher);
    config.alpha_encoding.hash(&mut hasher);
    hasher.finish()
}
