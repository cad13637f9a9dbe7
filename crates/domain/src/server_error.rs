use serde::{Deserialize, Serialize};

/// Error body returned by the API for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredError {
    /// HTTP status of the response.
    pub status_code: u16,
    /// Stable machine-readable error category, e.g. `ObjectAlreadyExists`.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Server-authored message.
    #[serde(default)]
    pub message: String,
    /// Request id for support.
    #[serde(default)]
    pub request_id: Option<String>,
}

/// A response whose body could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReadError {
    /// HTTP status of the response. May be a success status.
    pub status_code: u16,
    /// Client-side failure description, for logs only.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Failed API call as seen by the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerError {
    /// The server returned a structured error body.
    Structured(StructuredError),
    /// The response body was unreadable.
    ClientRead(ClientReadError),
}

impl ServerError {
    /// HTTP status of the failed response.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Structured(error) => error.status_code,
            Self::ClientRead(error) => error.status_code,
        }
    }
}

/// Error ready to be shown to an end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedError {
    /// Non-empty user-facing message.
    pub message: String,
    /// HTTP status of the failed response.
    pub status_code: u16,
    /// Error code from the server, when one was sent.
    pub error_code: Option<String>,
    /// Request id from the server, when one was sent.
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::ServerError;

    #[test]
    fn server_error_is_tagged_by_type() {
        let structured: Result<ServerError, _> = serde_json::from_str(
            r#"{"type":"structured","status_code":404,"error_code":"ObjectNotFound","message":"not found: disk","request_id":"7"}"#,
        );
        let client: Result<ServerError, _> =
            serde_json::from_str(r#"{"type":"client_read","status_code":200}"#);

        assert_eq!(structured.ok().map(|error| error.status_code()), Some(404));
        assert!(matches!(client, Ok(ServerError::ClientRead(_))));
    }
}
