#[derive(Debug, Clone, PartialEq)]
pub enum EventRepositoryError {
    Status { status: u16, body: String },
    Timeout,
    Network(String),
    InvalidRequest(String),
}

impl std::fmt::Display for EventRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventRepositoryError::Status { status, .. } => {
                write!(f, "Store responded with status {}", status)
            }
            EventRepositoryError::Timeout => write!(f, "Store request timed out"),
            EventRepositoryError::Network(msg) => write!(f, "Network error: {}", msg),
            EventRepositoryError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for EventRepositoryError {}

impl From<reqwest::Error> for EventRepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EventRepositoryError::Timeout
        } else if err.is_builder() {
            EventRepositoryError::InvalidRequest(err.to_string())
        } else {
            EventRepositoryError::Network(err.to_string())
        }
    }
}
