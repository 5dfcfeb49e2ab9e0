use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaliumError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EvaliumError {
    fn from(e: serde_json::Error) -> Self {
        EvaliumError::SerializationError(e.to_string())
    }
}
