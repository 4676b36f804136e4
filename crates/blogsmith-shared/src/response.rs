//! Handler envelope types.

use serde::{Deserialize, Serialize};

/// Status code plus a JSON-encoded body.
///
/// `body` holds JSON text: either a quoted string message or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// Envelope whose body is a plain string message.
    pub fn message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::Value::from(message).to_string(),
        }
    }

    /// Envelope whose body is a serialized object.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            body: serde_json::to_string(body)?,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Invocation-style event: the request JSON arrives as a string under `body`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvokeEvent {
    #[serde(default)]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_is_json_string() {
        let response = HandlerResponse::message(400, "Failed to generate blog");
        assert_eq!(response.body, "\"Failed to generate blog\"");
        assert!(!response.is_success());
    }

    #[test]
    fn test_envelope_field_names() {
        let response = HandlerResponse::message(200, "ok");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "\"ok\"");
    }

    #[test]
    fn test_message_escapes_quotes() {
        let response = HandlerResponse::message(500, "Error: bad \"input\"");
        let decoded: String = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, "Error: bad \"input\"");
    }
}
