use crate::core::types::EmotionEntry;

/// Rounds half-way cases toward positive infinity.
///
/// Gradient parameters are specified with browser `Math.round` semantics,
/// which differ from `f64::round` for negative half-way values.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamps `value` into `[min, max]`, mapping non-finite input to `fallback`.
///
/// Unlike `f64::clamp` this never panics; `max` wins when `min > max`.
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(min).min(max)
    } else {
        fallback
    }
}

/// Linear interpolation between `min` and `max` by `ratio`.
#[must_use]
pub fn lerp(min: f64, max: f64, ratio: f64) -> f64 {
    min + ratio * (max - min)
}

/// Mean intensity of every entry except `index`, in `[0, 100]`.
///
/// With fewer than two entries there are no "others" and the divisor is
/// treated as 1, so the result is 0.
#[must_use]
pub fn average_other_intensity(entries: &[EmotionEntry], index: usize) -> f64 {
    let others_sum: f64 = entries
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != index)
        .map(|(_, entry)| f64::from(entry.intensity()))
        .sum();
    let divisor = entries.len().saturating_sub(1).max(1);
    others_sum / divisor as f64
}

/// Index of the strongest emotion; ties keep the first one in list order.
#[must_use]
pub fn dominant_index(entries: &[EmotionEntry]) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u8)>, (idx, entry)| match best {
            Some((_, best_intensity)) if best_intensity >= entry.intensity() => best,
            _ => Some((idx, entry.intensity())),
        })
        .map(|(idx, _)| idx)
}
