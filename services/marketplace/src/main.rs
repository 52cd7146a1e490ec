use std::time::Duration;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use quickclick_auth_types::identity::JwtSecret;
use quickclick_core::config::Config as _;
use quickclick_core::tracing::init_tracing;

use quickclick_marketplace::config::MarketplaceConfig;
use quickclick_marketplace::infra::oauth2::HttpOAuth2Client;
use quickclick_marketplace::router::build_router;
use quickclick_marketplace::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("quickclick_marketplace=debug,tower_http=info,info");

    let config = MarketplaceConfig::from_env().context("load marketplace config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret.as_str()),
        access_token_ttl_secs: config.access_token_ttl_secs,
        oauth2_client: HttpOAuth2Client::new(
            config.google_userinfo_url.as_str(),
            Duration::from_secs(config.oauth2_timeout_secs),
        )?,
    };

    let router = build_router(state, &config.api_prefix, config.max_image_bytes);
    let addr = format!("0.0.0.0:{}", config.marketplace_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!(api_prefix = %config.api_prefix, "marketplace service listening on {addr}");
    axum::serve(listener, router).await.context("serve http")?;
    Ok(())
}
