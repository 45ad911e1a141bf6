use serde_json::{Map, Value};

use super::errors::EnvelopeError;

/// A parsed inbound telemetry request.
///
/// `payload` is the whole request object; the action-specific fields sit next
/// to `action` and `userId` at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    pub action: String,
    pub user_id: String,
    pub payload: Map<String, Value>,
}

impl EventEnvelope {
    /// Parses a raw request body. An empty body reads as `{}`.
    pub fn from_slice(body: &[u8]) -> Result<Self, EnvelopeError> {
        let payload = if body.iter().all(u8::is_ascii_whitespace) {
            Map::new()
        } else {
            match serde_json::from_slice::<Value>(body) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(EnvelopeError::Malformed(
                        "request body must be a JSON object".to_string(),
                    ))
                }
                Err(e) => return Err(EnvelopeError::Malformed(e.to_string())),
            }
        };

        let action = required_string(&payload, "action")?;
        let user_id = required_string(&payload, "userId")?;

        Ok(EventEnvelope {
            action,
            user_id,
            payload,
        })
    }
}

fn required_string(
    payload: &Map<String, Value>,
    field: &'static str,
) -> Result<String, EnvelopeError> {
    match payload.get(field) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        _ => Err(EnvelopeError::MissingField(field)),
    }
}
