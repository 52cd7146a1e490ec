use std::time::Duration;

use anyhow::Context as _;

use crate::domain::oauth2::{OAuth2Attributes, OAuth2Provider};
use crate::domain::repository::OAuth2AttributesPort;
use crate::error::MarketplaceError;

pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Fetches user-info attributes from the provider over HTTPS.
#[derive(Clone)]
pub struct HttpOAuth2Client {
    pub http: reqwest::Client,
    pub google_userinfo_url: String,
}

impl HttpOAuth2Client {
    /// `timeout` bounds the whole provider round-trip.
    pub fn new(
        google_userinfo_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build oauth2 http client")?;
        Ok(Self {
            http,
            google_userinfo_url: google_userinfo_url.into(),
        })
    }

    fn userinfo_url(&self, provider: OAuth2Provider) -> &str {
        match provider {
            OAuth2Provider::Google => &self.google_userinfo_url,
        }
    }
}

impl OAuth2AttributesPort for HttpOAuth2Client {
    async fn fetch_attributes(
        &self,
        provider: OAuth2Provider,
        access_token: &str,
    ) -> Result<OAuth2Attributes, MarketplaceError> {
        let response = self
            .http
            .get(self.userinfo_url(provider))
            .bearer_auth(access_token)
            .send()
            .await
            .context("request oauth2 user info")?;

        let status = response.status();
        if status.is_client_error() {
            tracing::debug!(%status, ?provider, "provider rejected access token");
            return Err(MarketplaceError::OAuth2AuthenticationProcessing(
                "OAuth2 provider rejected the access token".to_owned(),
            ));
        }

        let attributes = response
            .error_for_status()
            .context("oauth2 user info status")?
            .json::<OAuth2Attributes>()
            .await
            .context("decode oauth2 user info")?;
        Ok(attributes)
    }
}
