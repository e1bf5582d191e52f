use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

pub const MALFORMED_JSON: &str = "Malformed JSON in request body";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Every failure a handler can return. Bodies are plain text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Malformed JSON in request body")]
    MalformedJson,
    /// Body was rejected before parsing (missing JSON content type, size limit).
    #[error("{1}")]
    Rejected(StatusCode, String),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) | Self::MalformedJson => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let text = e.to_string();
        match e {
            ServiceError::Validation(_) => Self::Validation(text),
            ServiceError::NotFound => Self::NotFound(text),
            ServiceError::DuplicateSsn | ServiceError::SsnImmutable => Self::Conflict(text),
            ServiceError::Internal(detail) => Self::Internal(detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => Self::MalformedJson,
            JsonRejection::MissingJsonContentType(_) => {
                Self::Rejected(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            _ => Self::Rejected(rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(detail) => error!(error = %detail, "request failed"),
            Self::MalformedJson => warn!("malformed json body rejected"),
            Self::Rejected(status, reason) => warn!(%status, %reason, "request body rejected"),
            _ => {}
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::FieldError;

    #[test]
    fn service_errors_map_to_status_and_text() {
        let cases = [
            (ServiceError::Validation(FieldError::new("firstName", "firstName must only be letters.")),
             StatusCode::BAD_REQUEST, "firstName must only be letters."),
            (ServiceError::NotFound, StatusCode::NOT_FOUND, "The person with the provided SSN could not be found"),
            (ServiceError::DuplicateSsn, StatusCode::BAD_REQUEST, "A person with the given SSN is already registered"),
            (ServiceError::SsnImmutable, StatusCode::BAD_REQUEST, "Cannot update SSN"),
            (ServiceError::internal("lock poisoned at repo.rs:42"), StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR),
        ];
        for (err, status, text) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.to_string(), text);
        }
    }

    #[test]
    fn body_rejections_are_client_errors() {
        let api = ApiError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".into());
        assert_eq!(api.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(api.to_string(), "length limit exceeded");
        assert!(api.status().is_client_error());
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let api = ApiError::Internal("secret detail".into());
        assert!(!api.to_string().contains("secret"));
    }
}
