use std::fmt;

#[derive(Debug)]
pub enum SubmissionError {
    ValidationError(String),
    TransportError(String),
    StorageError(String),
    ConfigError(String),
}

// Implement Display manually instead of using derive
impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmissionError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            SubmissionError::TransportError(msg) => write!(f, "Mail transport error: {}", msg),
            SubmissionError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            SubmissionError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SubmissionError {}
