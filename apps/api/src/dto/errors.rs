use console_access_domain::{ClientReadError, ProcessedError, ServerError, StructuredError};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Failed API call as captured by the browser client.
#[derive(Debug, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/server-error-request.ts"
)]
pub enum ServerErrorRequest {
    /// The server returned a JSON error body.
    Structured {
        status_code: u16,
        error_code: Option<String>,
        #[serde(default)]
        message: String,
        request_id: Option<String>,
    },
    /// The response body could not be read or parsed.
    ClientRead {
        status_code: u16,
        detail: Option<String>,
    },
}

/// Incoming payload for error classification.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/process-error-request.ts"
)]
pub struct ProcessErrorRequest {
    /// Logical name of the API operation that failed, e.g. `instanceCreate`.
    pub operation: String,
    pub error: ServerErrorRequest,
}

/// Error ready to be shown to the user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/processed-error-response.ts"
)]
pub struct ProcessedErrorResponse {
    pub message: String,
    pub status_code: u16,
    pub error_code: Option<String>,
    pub request_id: Option<String>,
}

impl From<ServerErrorRequest> for ServerError {
    fn from(value: ServerErrorRequest) -> Self {
        match value {
            ServerErrorRequest::Structured {
                status_code,
                error_code,
                message,
                request_id,
            } => Self::Structured(StructuredError {
                status_code,
                error_code,
                message,
                request_id,
            }),
            ServerErrorRequest::ClientRead {
                status_code,
                detail,
            } => Self::ClientRead(ClientReadError {
                status_code,
                detail,
            }),
        }
    }
}

impl From<ProcessedError> for ProcessedErrorResponse {
    fn from(value: ProcessedError) -> Self {
        Self {
            message: value.message,
            status_code: value.status_code,
            error_code: value.error_code,
            request_id: value.request_id,
        }
    }
}
