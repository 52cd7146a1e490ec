//! OAuth2 provider dispatch.
//!
//! Each supported provider is a variant of [`OAuth2Provider`]; its attribute
//! map is read into the matching [`OAuth2UserInfo`] variant.

use serde_json::{Map, Value};

use quickclick_domain::user::AuthProvider;

use crate::error::MarketplaceError;

/// Raw attribute map returned by a provider's user-info endpoint.
pub type OAuth2Attributes = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuth2Provider {
    Google,
}

impl OAuth2Provider {
    /// Resolve a registration id such as `"google"`, ignoring case.
    pub fn from_registration_id(registration_id: &str) -> Result<Self, MarketplaceError> {
        if registration_id.eq_ignore_ascii_case(AuthProvider::Google.as_str()) {
            Ok(Self::Google)
        } else {
            Err(MarketplaceError::OAuth2AuthenticationProcessing(format!(
                "Sorry! Login with {registration_id} is not supported yet."
            )))
        }
    }

    pub fn auth_provider(self) -> AuthProvider {
        match self {
            Self::Google => AuthProvider::Google,
        }
    }

    /// Interpret `attributes` according to this provider's layout.
    pub fn user_info(self, attributes: &OAuth2Attributes) -> OAuth2UserInfo {
        match self {
            Self::Google => OAuth2UserInfo::Google(GoogleOAuth2UserInfo::from_attributes(attributes)),
        }
    }
}

/// Google OpenID Connect user-info (`sub`, `name`, `email`, `picture`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleOAuth2UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

impl GoogleOAuth2UserInfo {
    pub fn from_attributes(attributes: &OAuth2Attributes) -> Self {
        Self {
            id: string_attribute(attributes, "sub").unwrap_or_default(),
            name: string_attribute(attributes, "name").unwrap_or_default(),
            email: string_attribute(attributes, "email").unwrap_or_default(),
            image_url: string_attribute(attributes, "picture"),
        }
    }
}

fn string_attribute(attributes: &OAuth2Attributes, key: &str) -> Option<String> {
    attributes
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Provider-specific user info behind one accessor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuth2UserInfo {
    Google(GoogleOAuth2UserInfo),
}

impl OAuth2UserInfo {
    pub fn provider(&self) -> OAuth2Provider {
        match self {
            Self::Google(_) => OAuth2Provider::Google,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Google(info) => &info.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Google(info) => &info.name,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Google(info) => &info.email,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Google(info) => info.image_url.as_deref(),
        }
    }
}

/// Build the user info for `registration_id` from a provider attribute map.
pub fn get_oauth2_user_info(
    registration_id: &str,
    attributes: &OAuth2Attributes,
) -> Result<OAuth2UserInfo, MarketplaceError> {
    let provider = OAuth2Provider::from_registration_id(registration_id)?;
    Ok(provider.user_info(attributes))
}
