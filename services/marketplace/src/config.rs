use serde::Deserialize;

use quickclick_auth_types::token::ACCESS_TOKEN_EXP;
use quickclick_core::config::Config;

use crate::infra::oauth2::GOOGLE_USERINFO_URL;

/// Marketplace service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct MarketplaceConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `MARKETPLACE_PORT`.
    #[serde(default = "default_port")]
    pub marketplace_port: u16,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// Access-token lifetime in seconds (default 4 hours).
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: u64,
    /// Prefix every API route is nested under (default `/v1.0`).
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_google_userinfo_url")]
    pub google_userinfo_url: String,
    /// Upper bound on an OAuth2 user-info round-trip (default 10s).
    #[serde(default = "default_oauth2_timeout_secs")]
    pub oauth2_timeout_secs: u64,
    /// Request body limit, sized for image uploads (default 5 MiB).
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl Config for MarketplaceConfig {}

fn default_port() -> u16 {
    8080
}

fn default_access_token_ttl() -> u64 {
    ACCESS_TOKEN_EXP
}

fn default_api_prefix() -> String {
    "/v1.0".to_owned()
}

fn default_google_userinfo_url() -> String {
    GOOGLE_USERINFO_URL.to_owned()
}

fn default_oauth2_timeout_secs() -> u64 {
    10
}

fn default_max_image_bytes() -> usize {
    5 * 1024 * 1024
}
