#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ZoneError {
    /// Out-of-domain value: negative height or distance, malformed or
    /// out-of-range coordinate, non-finite number.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ZoneError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ZoneError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ZoneError>;
