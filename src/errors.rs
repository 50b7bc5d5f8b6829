use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),
}
