use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("No registered action found for name '{0}'.")]
    UnknownActionError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, ActionError>;
