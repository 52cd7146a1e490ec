//! Mock auth helpers for router tests.
//!
//! `MockAuth` signs a real access token with [`TEST_JWT_SECRET`] so requests
//! pass through the `AuthenticatedUser` extractor without a login round-trip.
//! Build the router state with the same secret.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};

use quickclick_auth_types::token::issue_access_token;
use quickclick_domain::user::Role;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

/// Configurable identity injected into test requests.
pub struct MockAuth {
    pub user_id: i64,
    pub email: String,
    pub role: Role,
}

impl MockAuth {
    pub fn new(user_id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    pub fn user(user_id: i64, email: impl Into<String>) -> Self {
        Self::new(user_id, email, Role::User)
    }

    /// Signed bearer token for this identity.
    pub fn token(&self) -> String {
        let (token, _) =
            issue_access_token(self.user_id, &self.email, self.role, TEST_JWT_SECRET, 3600)
                .unwrap();
        token
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap();
        (AUTHORIZATION, value)
    }
}
