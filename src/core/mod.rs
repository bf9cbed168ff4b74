pub mod position;
pub mod primitives;
pub mod sizing;
pub mod types;

pub use position::{EllipseLayout, emotion_positions, slot_angle};
pub use primitives::{average_other_intensity, dominant_index};
pub use sizing::{GlowConfig, SizingConfig, all_circle_metrics, circle_metrics};
pub use types::{CircleMetrics, EmotionEntry, HexColor, NO_DATA_LABEL, PercentPoint};
