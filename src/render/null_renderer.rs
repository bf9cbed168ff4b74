use crate::error::MoodResult;
use crate::render::{MoodFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_circle_count: usize,
    pub last_layer_count: usize,
    pub frames_rendered: u64,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &MoodFrame) -> MoodResult<()> {
        frame.validate()?;
        self.last_circle_count = frame.circles.len();
        self.last_layer_count = frame.background.layers.len();
        self.frames_rendered = self.frames_rendered.saturating_add(1);
        Ok(())
    }
}
