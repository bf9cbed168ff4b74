mod background_builder;
mod engine;
mod engine_config;
mod frame_builder;
mod json_contract;
mod layout_builder;
mod layout_cache;
pub mod normalization;
mod validation;

pub use background_builder::{
    GradientConfig, IntensityRamp, OpacityBand, build_background, neutral_background,
};
pub use engine::MoodChartEngine;
pub use engine_config::MoodLayoutConfig;
pub use frame_builder::build_frame;
pub use json_contract::{MOOD_LAYOUT_JSON_SCHEMA_V1, MoodLayoutJsonContractV1};
pub use layout_builder::{MoodLayout, build_layout};
pub use layout_cache::LayoutCacheStats;
pub use normalization::{
    EmotionPalette, RawEmotionRecord, normalize_intensity_map, normalize_json, normalize_records,
    sanitize_intensity,
};
pub use validation::validate_config;
