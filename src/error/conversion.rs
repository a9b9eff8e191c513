/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "access denied",
 *   "status": 403
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures carry details worth logging; client errors
        // only get a warning line.
        if status.is_server_error() || status == StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
