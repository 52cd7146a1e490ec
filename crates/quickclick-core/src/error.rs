use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON body returned for every non-2xx response produced by a service.
///
/// ```json
/// { "kind": "RESOURCE_NOT_FOUND", "message": "Advert not found with id: 7" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

/// Implemented by service error enums to share one response shape.
pub trait ErrorKind: std::fmt::Display {
    /// Stable SCREAMING_SNAKE_CASE identifier for clients.
    fn kind(&self) -> &'static str;

    fn status(&self) -> StatusCode;

    /// Text placed in `message`. Defaults to the `Display` output.
    fn public_message(&self) -> String {
        self.to_string()
    }
}

/// Build the error envelope for `err`.
///
/// 5xx responses are logged at error level with the full `Display` chain;
/// tower-http's TraceLayer already records method/uri/status for the rest.
pub fn error_response<E: ErrorKind>(err: &E) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(error = %err, kind = err.kind(), "internal error");
    }
    let body = ErrorBody {
        kind: err.kind().to_owned(),
        message: err.public_message(),
    };
    (status, Json(body)).into_response()
}
