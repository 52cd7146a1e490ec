use axum::Json;
use axum::extract::Path;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;

use crate::error::MarketplaceError;

pub mod advert;
pub mod auth;
pub mod image;

/// Map an extractor rejection onto the service envelope. Oversized bodies
/// keep their 413; everything else is a bad argument.
fn rejected(status: StatusCode, text: String) -> MarketplaceError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        MarketplaceError::PayloadTooLarge(text)
    } else {
        MarketplaceError::InvalidArgument(text)
    }
}

/// Unwrap a JSON body, reporting malformed input in the service envelope.
pub(crate) fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, MarketplaceError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))
}

/// Unwrap path parameters, reporting unparsable segments in the service envelope.
pub(crate) fn path_param<T>(
    params: Result<Path<T>, PathRejection>,
) -> Result<T, MarketplaceError> {
    params
        .map(|Path(value)| value)
        .map_err(|rejection| rejected(rejection.status(), rejection.body_text()))
}

pub(crate) fn multipart_error(error: MultipartError) -> MarketplaceError {
    rejected(error.status(), error.body_text())
}
