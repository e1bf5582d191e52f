use thiserror::Error;

/// First failing rule of a person payload, with the message sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed to be empty"))
    }

    pub fn not_allowed(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed"))
    }

    pub fn not_an_object() -> Self {
        Self::new("value", "\"value\" must be of type object")
    }
}
