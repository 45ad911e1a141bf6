use crate::repositories::errors::event_repository_errors::EventRepositoryError;

#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryServiceError {
    UnknownAction(String),
    RepositoryError(EventRepositoryError),
}

impl std::fmt::Display for TelemetryServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelemetryServiceError::UnknownAction(action) => {
                write!(f, "Unknown action: {}", action)
            }
            TelemetryServiceError::RepositoryError(err) => {
                write!(f, "Upstream write failed: {}", err)
            }
        }
    }
}

impl std::error::Error for TelemetryServiceError {}

impl From<EventRepositoryError> for TelemetryServiceError {
    fn from(err: EventRepositoryError) -> Self {
        TelemetryServiceError::RepositoryError(err)
    }
}
