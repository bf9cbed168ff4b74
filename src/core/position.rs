use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::types::PercentPoint;
use crate::error::{MoodError, MoodResult};

/// Ellipse on which emotions are distributed, in percent-of-container units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Lower bound applied to both coordinates after placement.
    pub min_coordinate: f64,
    /// Upper bound applied to both coordinates after placement.
    pub max_coordinate: f64,
}

impl Default for EllipseLayout {
    fn default() -> Self {
        Self {
            center_x: 50.0,
            center_y: 50.0,
            radius_x: 40.0,
            radius_y: 35.0,
            min_coordinate: 10.0,
            max_coordinate: 90.0,
        }
    }
}

impl EllipseLayout {
    pub(crate) fn validate(self) -> MoodResult<Self> {
        for (value, name) in [
            (self.center_x, "center_x"),
            (self.center_y, "center_y"),
            (self.min_coordinate, "min_coordinate"),
            (self.max_coordinate, "max_coordinate"),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(MoodError::InvalidConfig(format!(
                    "ellipse `{name}` must be finite and in [0, 100]"
                )));
            }
        }
        for (value, name) in [(self.radius_x, "radius_x"), (self.radius_y, "radius_y")] {
            if !value.is_finite() || value < 0.0 {
                return Err(MoodError::InvalidConfig(format!(
                    "ellipse `{name}` must be finite and >= 0"
                )));
            }
        }
        if self.min_coordinate > self.max_coordinate {
            return Err(MoodError::InvalidConfig(
                "ellipse min_coordinate must be <= max_coordinate".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn center(self) -> PercentPoint {
        PercentPoint::new(self.center_x, self.center_y)
    }

    /// Point on the ellipse for `angle`, before clamping.
    #[must_use]
    pub fn point_on_ellipse(self, angle: f64) -> PercentPoint {
        PercentPoint::new(
            self.center_x + self.radius_x * angle.cos(),
            self.center_y + self.radius_y * angle.sin(),
        )
    }

    fn clamp(self, point: PercentPoint) -> PercentPoint {
        let clamp_axis = |value: f64, fallback: f64| {
            if value.is_finite() {
                value.max(self.min_coordinate).min(self.max_coordinate)
            } else {
                fallback
            }
        };
        PercentPoint::new(
            clamp_axis(point.x, self.center_x),
            clamp_axis(point.y, self.center_y),
        )
    }
}

/// Angle of slot `index` out of `count`: index 0 at the top, then clockwise
/// in screen coordinates (y grows downward).
#[must_use]
pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    (index as f64 / count as f64) * TAU - FRAC_PI_2
}

/// Positions for `count` emotions in list order.
///
/// A single emotion sits at the ellipse center; two or more are spread
/// evenly around the ellipse and clamped into the coordinate bounds.
#[must_use]
pub fn emotion_positions(count: usize, layout: EllipseLayout) -> Vec<PercentPoint> {
    match count {
        0 => Vec::new(),
        1 => vec![layout.center()],
        _ => (0..count)
            .map(|index| layout.clamp(layout.point_on_ellipse(slot_angle(index, count))))
            .collect(),
    }
}
