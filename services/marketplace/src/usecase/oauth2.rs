use quickclick_domain::user::Role;

use crate::domain::oauth2::{OAuth2Provider, OAuth2UserInfo};
use crate::domain::repository::{OAuth2AttributesPort, UserRepository};
use crate::domain::types::{NewUser, User, UserPrincipal, UserProfileUpdate};
use crate::error::MarketplaceError;
use crate::usecase::login::{AccessToken, issue_token};

/// Link the provider identity to a stored account, creating one on first
/// login and refreshing the profile afterwards.
pub async fn process_oauth2_user<U: UserRepository>(
    users: &U,
    info: &OAuth2UserInfo,
) -> Result<User, MarketplaceError> {
    if info.email().is_empty() {
        return Err(MarketplaceError::OAuth2AuthenticationProcessing(
            "Email not found from OAuth2 provider".to_owned(),
        ));
    }

    let provider = info.provider().auth_provider();
    match users.find_by_email(info.email()).await? {
        Some(existing) if existing.provider != provider => {
            Err(MarketplaceError::OAuth2AuthenticationProcessing(format!(
                "Looks like you're signed up with {p} account. Please use your {p} account to login.",
                p = existing.provider
            )))
        }
        Some(existing) => {
            let update = UserProfileUpdate {
                username: info.name().to_owned(),
                image_url: info.image_url().map(str::to_owned),
            };
            users.update_profile(existing.id, &update).await
        }
        None => {
            let user = users
                .create(&NewUser {
                    email: info.email().to_owned(),
                    username: info.name().to_owned(),
                    password: None,
                    image_url: info.image_url().map(str::to_owned),
                    email_verified: false,
                    provider,
                    provider_id: Some(info.id().to_owned()),
                    role: Role::User,
                })
                .await?;
            tracing::debug!(user_id = user.id, %provider, "oauth2 user registered");
            Ok(user)
        }
    }
}

// ── OAuth2Login ──────────────────────────────────────────────────────────────

pub struct OAuth2LoginOutput {
    pub principal: UserPrincipal,
    pub token: AccessToken,
}

pub struct OAuth2LoginUseCase<U: UserRepository, P: OAuth2AttributesPort> {
    pub users: U,
    pub attributes: P,
    pub jwt_secret: String,
    pub access_token_ttl_secs: u64,
}

impl<U: UserRepository, P: OAuth2AttributesPort> OAuth2LoginUseCase<U, P> {
    /// Exchange a provider access token for a marketplace token.
    pub async fn execute(
        &self,
        registration_id: &str,
        provider_access_token: &str,
    ) -> Result<OAuth2LoginOutput, MarketplaceError> {
        let provider = OAuth2Provider::from_registration_id(registration_id)?;
        let attributes = self
            .attributes
            .fetch_attributes(provider, provider_access_token)
            .await?;
        let info = provider.user_info(&attributes);

        let user = process_oauth2_user(&self.users, &info).await?;
        let principal = UserPrincipal::from(user);
        let token = issue_token(&principal, &self.jwt_secret, self.access_token_ttl_secs)?;
        tracing::debug!(user_id = principal.id, registration_id, "oauth2 login succeeded");
        Ok(OAuth2LoginOutput { principal, token })
    }
}
