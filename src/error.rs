use thiserror::Error;

pub type MoodResult<T> = Result<T, MoodError>;

#[derive(Debug, Error)]
pub enum MoodError {
    #[error("invalid emotion: {0}")]
    InvalidEmotion(String),

    #[error("invalid color `{0}`: expected #RRGGBB or #RGB")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
