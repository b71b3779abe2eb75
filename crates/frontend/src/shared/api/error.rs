use thiserror::Error;

/// Failure of one API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build from a non-2xx response. The message is taken from a JSON
    /// `message` or `error` field when the body has one.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                ["message", "error"]
                    .iter()
                    .find_map(|field| json.get(field)?.as_str().map(str::to_string))
            })
            .unwrap_or_else(|| {
                let text = body.trim();
                if text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    text.chars().take(200).collect()
                }
            });
        ApiError::Status { status, message }
    }

    /// Short text for error boxes
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Server is unreachable. Check your connection.".to_string(),
            ApiError::Unauthorized => "Session expired. Please sign in again.".to_string(),
            ApiError::Status { status: 404, .. } => "Record not found.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "Unexpected data from server.".to_string()
            }
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized() {
        assert_eq!(ApiError::from_status(401, "{}"), ApiError::Unauthorized);
    }

    #[test]
    fn test_message_from_json_body() {
        let err = ApiError::from_status(422, r#"{"message":"Name is required"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "Name is required".to_string()
            }
        );
        assert_eq!(err.user_message(), "Name is required");

        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err.user_message(), "boom");
    }

    #[test]
    fn test_message_from_plain_body() {
        let err = ApiError::from_status(502, "  Bad Gateway \n");
        assert_eq!(err.user_message(), "Bad Gateway");
        let err = ApiError::from_status(503, "");
        assert_eq!(err.user_message(), "HTTP 503");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::from_status(404, "").user_message(), "Record not found.");
    }
}
