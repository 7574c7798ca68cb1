use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HoloboxError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("animation loop is already running")]
    AlreadyRunning,
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, HoloboxError>;
