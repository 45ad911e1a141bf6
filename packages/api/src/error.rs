use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::event::errors::EnvelopeError;
use shared::models::event::responses::ErrorResponse;
use shared::services::errors::telemetry_service_errors::TelemetryServiceError;

#[derive(Debug)]
pub enum ApiError {
    MalformedRequest(String),
    MissingField(&'static str),
    TelemetryService(TelemetryServiceError),
    PayloadTooLarge,
    MethodNotAllowed,
    NotFound,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MalformedRequest(_) => write!(f, "Invalid JSON"),
            ApiError::MissingField(field) => write!(f, "Missing {}", field),
            ApiError::TelemetryService(err) => write!(f, "{}", err),
            ApiError::PayloadTooLarge => write!(f, "Payload Too Large"),
            ApiError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            ApiError::NotFound => write!(f, "Not Found"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<EnvelopeError> for ApiError {
    fn from(error: EnvelopeError) -> Self {
        match error {
            EnvelopeError::Malformed(msg) => ApiError::MalformedRequest(msg),
            EnvelopeError::MissingField(field) => ApiError::MissingField(field),
        }
    }
}

impl From<TelemetryServiceError> for ApiError {
    fn from(error: TelemetryServiceError) -> Self {
        ApiError::TelemetryService(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::TelemetryService(TelemetryServiceError::UnknownAction(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::TelemetryService(TelemetryServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::repositories::errors::event_repository_errors::EventRepositoryError;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        assert_eq!(
            ApiError::from(EnvelopeError::Malformed("eof".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(EnvelopeError::MissingField("userId")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(TelemetryServiceError::UnknownAction("dance".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_failure_is_server_error() {
        let error = ApiError::from(TelemetryServiceError::RepositoryError(
            EventRepositoryError::Timeout,
        ));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.to_string(),
            "Upstream write failed: Store request timed out"
        );
    }

    #[test]
    fn test_malformed_request_hides_parser_detail() {
        let error = ApiError::MalformedRequest("expected value at line 1 column 1".to_string());
        assert_eq!(error.to_string(), "Invalid JSON");
    }

    #[test]
    fn test_upstream_body_is_not_echoed() {
        let error = ApiError::from(TelemetryServiceError::RepositoryError(
            EventRepositoryError::Status {
                status: 401,
                body: "No API key found in request".to_string(),
            },
        ));
        assert_eq!(
            error.to_string(),
            "Upstream write failed: Store responded with status 401"
        );
    }

    #[test]
    fn test_payload_too_large() {
        assert_eq!(ApiError::PayloadTooLarge.to_string(), "Payload Too Large");
        assert_eq!(
            ApiError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_method_not_allowed_message() {
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method Not Allowed");
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
