use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The catalog answered 404. Carries the server's `message`, possibly empty.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
