mod css_renderer;
mod frame;
mod null_renderer;
mod primitives;

pub use css_renderer::{AlphaStop, CircleStyle, CssChart, CssCircle, CssRenderer};
pub use frame::{EmotionCircle, MoodFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    AlphaEncoding, Background, ColorStop, ColorStops, GradientLayer, RadialPosition, RadialShape,
    StopPaint, format_css_number,
};

use crate::error::MoodResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `MoodFrame` so
/// output code stays isolated from layout math.
pub trait Renderer {
    fn render(&mut self, frame: &MoodFrame) -> MoodResult<()>;
}
