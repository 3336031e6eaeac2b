use thiserror::Error;

/// Failures the domain layer reports to callers. Storage failures travel as
/// plain `anyhow` errors next to these.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound { entity, id: id.into() }
    }
}

/// Failures talking to the text-generation backend of the assistant
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("No API key configured for the advisory service")]
    MissingCredential,
    #[error("Request to the advisory service failed: {0}")]
    Http(String),
    #[error("Advisory service returned status {0}: {1}")]
    Status(u16, String),
    #[error("Advisory service returned an unexpected response: {0}")]
    Malformed(String),
    #[error("Advisory service returned no text")]
    EmptyResponse,
}
