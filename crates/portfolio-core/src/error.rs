use thiserror::Error;

/// Errors raised while interpreting page attributes or configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("missing data-progress attribute")]
    MissingProgress,
    #[error("invalid data-progress value {0:?}")]
    InvalidProgress(String),
    #[error("progress {0} outside 0..=100")]
    ProgressOutOfRange(f64),
    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
