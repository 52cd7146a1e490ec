use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use quickclick_core::error::{ErrorKind, error_response};

/// Marketplace service error variants.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("{resource} not found with {field}: {value}")]
    ResourceNotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
    #[error("Username not found with email: {0}")]
    UsernameNotFound(String),
    #[error("{0}")]
    Authorization(String),
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Please fill all fields")]
    MissingFields,
    #[error("{0}")]
    AdvertRegistration(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    OAuth2AuthenticationProcessing(String),
    #[error("bad credentials")]
    BadCredentials,
    #[error("email address already in use")]
    EmailAlreadyInUse,
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl MarketplaceError {
    pub fn not_found(resource: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::ResourceNotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    pub fn unauthorized_access() -> Self {
        Self::Authorization("Unauthorized access".to_owned())
    }
}

impl ErrorKind for MarketplaceError {
    fn kind(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "RESOURCE_NOT_FOUND",
            Self::UsernameNotFound(_) => "USERNAME_NOT_FOUND",
            Self::Authorization(_) => "UNAUTHORIZED_ACCESS",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::MissingFields => "MISSING_FIELDS",
            Self::AdvertRegistration(_) => "ADVERT_REGISTRATION",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::OAuth2AuthenticationProcessing(_) => "OAUTH2_AUTHENTICATION_PROCESSING",
            Self::BadCredentials => "BAD_CREDENTIALS",
            Self::EmailAlreadyInUse => "EMAIL_ALREADY_IN_USE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::UsernameNotFound(_)
            | Self::OAuth2AuthenticationProcessing(_)
            | Self::BadCredentials => StatusCode::UNAUTHORIZED,
            Self::Authorization(_) | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidArgument(_) | Self::MissingFields | Self::AdvertRegistration(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::EmailAlreadyInUse => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "an unexpected error occurred".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for MarketplaceError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
