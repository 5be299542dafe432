use thiserror::Error;

/// Failures raised while producing a tone. Always swallowed by the trigger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioError {
    #[error("audio output unavailable")]
    Unavailable,
    #[error("failed to create audio node: {0}")]
    Node(String),
    #[error("failed to schedule tone: {0}")]
    Schedule(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
