//! mood-chart: deterministic layout engine for emotion-distribution charts.
//!
//! Given an ordered list of labeled emotion intensities, the engine places
//! each emotion on an ellipse, sizes its bubble and glow, and composes the
//! layered gradient painted behind the chart. Everything is a pure function
//! of the input list and an injected `MoodLayoutConfig`.

pub mod api;
pub mod core;
pub mod error;
pub mod journal;
pub mod render;
pub mod telemetry;

pub use api::{MoodChartEngine, MoodLayout, MoodLayoutConfig};
pub use error::{MoodError, MoodResult};
