use models::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] FieldError),
    #[error("The person with the provided SSN could not be found")]
    NotFound,
    #[error("A person with the given SSN is already registered")]
    DuplicateSsn,
    #[error("Cannot update SSN")]
    SsnImmutable,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn internal(msg: impl Into<String>) -> Self { Self::Internal(msg.into()) }
}
