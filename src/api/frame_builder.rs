use crate::render::{AlphaEncoding, EmotionCircle, MoodFrame};

use super::MoodLayout;

/// Materializes a layout into draw commands for a `Renderer`.
#[must_use]
pub fn build_frame(layout: &MoodLayout, alpha_encoding: AlphaEncoding) -> MoodFrame {
    layout.iter().fold(
        MoodFrame::new(layout.background.clone(), alpha_encoding),
        |frame, (entry, center, metrics)| {
            frame.with_circle(EmotionCircle {
                label: entry.label().to_owned(),
                intensity: entry.intensity(),
                color: entry.color(),
                center,
                metrics,
            })
        },
    )
}
