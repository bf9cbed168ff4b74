use crate::error::MoodResult;

use super::MoodLayoutConfig;

/// Checks every numeric knob so layout math stays finite and in range.
pub fn validate_config(config: MoodLayoutConfig) -> MoodResult<MoodLayoutConfig> {
    config.ellipse.validate()?;
    config.sizing.validate()?;
    config.gradient.validate()?;
    Ok(config)
}
