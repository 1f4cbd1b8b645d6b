use thiserror::Error;

/// Errors crossing the boundary between the core and its callers.
///
/// Failures of individual resolution sources never reach this type; the
/// pipeline absorbs them and falls back. `CoreError` is what the remaining
/// fallible operations (auth delegation, adapter calls) report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("authentication rejected: {0}")]
    AuthRejected(String),
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("external service error: {0}")]
    ExternalServiceError(String),
    #[error("internal server error")]
    InternalServerError,
}
