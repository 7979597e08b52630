use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverResponseParserError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::error::Error),
    #[error("Field not found in solver reply: {0}")]
    FieldNotFound(String),
}
