use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::EmotionEntry;
use crate::error::MoodResult;
use crate::render::{MoodFrame, Renderer};

use super::layout_cache::{LayoutCache, LayoutCacheKey};
use super::normalization::{
    EmotionPalette, RawEmotionRecord, normalize_intensity_map, normalize_json, normalize_records,
};
use super::validation::validate_config;
use super::{LayoutCacheStats, MoodLayout, MoodLayoutConfig, build_frame, build_layout};

/// Main facade consumed by host applications.
///
/// Owns the current emotion list, the injected config and a memo of derived
/// layouts. Layouts are never mutated in place: every input change simply
/// resolves to another (possibly cached) pure computation.
pub struct MoodChartEngine<R: Renderer> {
    renderer: R,
    config: MoodLayoutConfig,
    palette: EmotionPalette,
    entries: Vec<EmotionEntry>,
    cache: LayoutCache,
}

impl<R: Renderer> MoodChartEngine<R> {
    pub fn new(renderer: R, config: MoodLayoutConfig) -> MoodResult<Self> {
        let config = validate_config(config)?;
        Ok(Self {
            renderer,
            config,
            palette: EmotionPalette::default(),
            entries: Vec::new(),
            cache: LayoutCache::default(),
        })
    }

    #[must_use]
    pub fn with_palette(mut self, palette: EmotionPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn config(&self) -> MoodLayoutConfig {
        self.config
    }

    pub fn set_config(&mut self, config: MoodLayoutConfig) -> MoodResult<()> {
        self.config = validate_config(config)?;
        debug!("mood layout config replaced");
        Ok(())
    }

    #[must_use]
    pub fn palette(&self) -> &EmotionPalette {
        &self.palette
    }

    #[must_use]
    pub fn emotions(&self) -> &[EmotionEntry] {
        &self.entries
    }

    /// Replaces the emotion list as-is; an empty list renders the neutral chart.
    pub fn set_emotions(&mut self, entries: Vec<EmotionEntry>) {
        debug!(count = entries.len(), "set emotions");
        self.entries = entries;
    }

    /// Replaces the emotion list from loosely-shaped records.
    pub fn set_raw_records(&mut self, records: &[RawEmotionRecord]) {
        let entries = normalize_records(records, &self.palette);
        debug!(
            raw_count = records.len(),
            count = entries.len(),
            "set emotions from raw records"
        );
        self.entries = entries;
    }

    /// Replaces the emotion list from a `label -> intensity` map.
    pub fn set_intensity_map(&mut self, intensities: &IndexMap<String, f64>) {
        self.entries = normalize_intensity_map(intensities, &self.palette);
        debug!(count = self.entries.len(), "set emotions from intensity map");
    }

    /// Replaces the emotion list from a JSON payload.
    ///
    /// The current list is kept when the payload cannot be parsed.
    pub fn set_emotions_json(&mut self, input: &str) -> MoodResult<()> {
        self.entries = normalize_json(input, &self.palette)?;
        debug!(count = self.entries.len(), "set emotions from json");
        Ok(())
    }

    /// Layout of the current emotions under the current config.
    pub fn layout(&mut self) -> MoodLayout {
        let key = LayoutCacheKey::new(&self.entries, &self.config);
        if let Some(layout) = self.cache.get(key, &self.entries, &self.config) {
            trace!(count = layout.len(), "layout cache hit");
            return layout;
        }

        let layout = build_layout(&self.entries, &self.config);
        trace!(
            count = layout.len(),
            layers = layout.background.layers.len(),
            "layout recomputed"
        );
        self.cache.insert(key, self.config, layout.clone());
        layout
    }

    /// CSS `background` value of the chart container.
    pub fn background_css(&mut self) -> String {
        let encoding = self.config.alpha_encoding;
        self.layout().background.to_css(encoding)
    }

    pub fn build_frame(&mut self) -> MoodFrame {
        let encoding = self.config.alpha_encoding;
        build_frame(&self.layout(), encoding)
    }

    pub fn render(&mut self) -> MoodResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn layout_cache_stats(&self) -> LayoutCacheStats {
        self.cache.stats()
    }

    pub fn clear_layout_cache(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
