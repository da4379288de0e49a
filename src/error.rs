use thiserror::Error;

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Failures visible at the advisor boundary.
///
/// The engine itself never fails; these are raised by callers that check
/// input before scoring it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AdvisorError {
    /// Human-facing message without the error class prefix
    pub fn message(&self) -> &str {
        match self {
            AdvisorError::InvalidInput(msg) => msg,
        }
    }
}
