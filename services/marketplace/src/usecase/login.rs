use serde::Serialize;

use quickclick_auth_types::token::issue_access_token;
use quickclick_domain::user::{AuthProvider, Role};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, UserPrincipal};
use crate::error::MarketplaceError;
use crate::infra::password::{hash_password, verify_password};

/// Bearer token handed back by every login flow.
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: u64,
}

pub(crate) fn issue_token(
    principal: &UserPrincipal,
    jwt_secret: &str,
    ttl_secs: u64,
) -> Result<AccessToken, MarketplaceError> {
    let (access_token, expires_at) = issue_access_token(
        principal.id,
        &principal.email,
        principal.role,
        jwt_secret,
        ttl_secs,
    )
    .map_err(|e| MarketplaceError::Internal(e.into()))?;
    Ok(AccessToken {
        access_token,
        token_type: "Bearer",
        expires_at,
    })
}

// ── LoadUserByUsername ───────────────────────────────────────────────────────

pub struct LoadUserByUsernameUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> LoadUserByUsernameUseCase<U> {
    /// Usernames are email addresses.
    pub async fn execute(&self, email: &str) -> Result<UserPrincipal, MarketplaceError> {
        self.users
            .find_by_email(email)
            .await?
            .map(UserPrincipal::from)
            .ok_or_else(|| MarketplaceError::UsernameNotFound(email.to_owned()))
    }
}

// ── LoadUserById ─────────────────────────────────────────────────────────────

pub struct LoadUserByIdUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> LoadUserByIdUseCase<U> {
    pub async fn execute(&self, id: i64) -> Result<UserPrincipal, MarketplaceError> {
        self.users
            .find_by_id(id)
            .await?
            .map(UserPrincipal::from)
            .ok_or_else(|| MarketplaceError::not_found("User", "id", id))
    }
}

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct SignupUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SignupUseCase<U> {
    pub async fn execute(&self, input: SignupInput) -> Result<User, MarketplaceError> {
        if [&input.username, &input.email, &input.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(MarketplaceError::MissingFields);
        }
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(MarketplaceError::EmailAlreadyInUse);
        }

        let password = hash_password(input.password).await?;
        let user = self
            .users
            .create(&NewUser {
                email: input.email,
                username: input.username,
                password: Some(password),
                image_url: None,
                email_verified: false,
                provider: AuthProvider::Local,
                provider_id: None,
                role: Role::User,
            })
            .await?;
        tracing::debug!(user_id = user.id, "local user registered");
        Ok(user)
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
}

impl<U: UserRepository> LoginUseCase<U> {
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccessToken, MarketplaceError> {
        let principal = self
            .users
            .find_by_email(email)
            .await?
            .map(UserPrincipal::from)
            .ok_or(MarketplaceError::BadCredentials)?;

        let Some(stored_hash) = principal.password.clone() else {
            return Err(MarketplaceError::BadCredentials);
        };
        if !verify_password(password.to_owned(), stored_hash).await? {
            return Err(MarketplaceError::BadCredentials);
        }

        tracing::debug!(user_id = principal.id, "local login succeeded");
        issue_token(&principal, &self.jwt_secret, self.access_token_ttl_secs)
    }
}
