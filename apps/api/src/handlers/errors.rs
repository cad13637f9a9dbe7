use axum::Json;
use axum::extract::State;
use console_access_domain::ServerError;

use crate::dto::{ProcessErrorRequest, ProcessedErrorResponse};
use crate::state::AppState;

pub async fn process_error_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProcessErrorRequest>,
) -> Json<ProcessedErrorResponse> {
    let error = ServerError::from(payload.error);
    let processed = state.error_catalog.process(&payload.operation, &error);

    Json(ProcessedErrorResponse::from(processed))
}
