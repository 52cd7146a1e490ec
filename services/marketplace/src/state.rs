use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use quickclick_auth_types::identity::JwtSecret;

use crate::infra::db::{DbAdvertRepository, DbImageDataRepository, DbUserRepository};
use crate::infra::oauth2::HttpOAuth2Client;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub access_token_ttl_secs: u64,
    pub oauth2_client: HttpOAuth2Client,
}

impl AppState {
    pub fn advert_repo(&self) -> DbAdvertRepository {
        DbAdvertRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn image_repo(&self) -> DbImageDataRepository {
        DbImageDataRepository {
            db: self.db.clone(),
        }
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
