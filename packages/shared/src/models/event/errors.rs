#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeError {
    Malformed(String),
    MissingField(&'static str),
}

impl std::fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvelopeError::Malformed(msg) => write!(f, "Malformed request body: {}", msg),
            EnvelopeError::MissingField(field) => write!(f, "Missing {}", field),
        }
    }
}

impl std::error::Error for EnvelopeError {}
