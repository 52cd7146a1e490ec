use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use quickclick_auth_types::identity::AuthenticatedUser;
use quickclick_domain::user::{AuthProvider, Role};

use crate::domain::types::UserPrincipal;
use crate::error::MarketplaceError;
use crate::handlers::{json_body, path_param};
use crate::state::AppState;
use crate::usecase::login::{
    AccessToken, LoadUserByIdUseCase, LoginUseCase, SignupInput, SignupUseCase,
};
use crate::usecase::oauth2::OAuth2LoginUseCase;

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct OAuth2LoginRequest {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct PrincipalResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub provider: AuthProvider,
}

impl From<UserPrincipal> for PrincipalResponse {
    fn from(principal: UserPrincipal) -> Self {
        Self {
            id: principal.id,
            email: principal.email,
            username: principal.username,
            role: principal.role,
            provider: principal.provider,
        }
    }
}

#[derive(Serialize)]
pub struct OAuth2LoginResponse {
    #[serde(flatten)]
    pub token: AccessToken,
    pub user: PrincipalResponse,
}

// ── POST /auth/signup ────────────────────────────────────────────────────────

pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), MarketplaceError> {
    let body = json_body(payload)?;
    let uc = SignupUseCase {
        users: state.user_repo(),
    };
    let user = uc
        .execute(SignupInput {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;
    let resp = SignupResponse {
        id: user.id,
        email: user.email,
        username: user.username,
    };
    Ok((StatusCode::CREATED, Json(resp)))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AccessToken>, MarketplaceError> {
    let body = json_body(payload)?;
    let uc = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
        access_token_ttl_secs: state.access_token_ttl_secs,
    };
    Ok(Json(uc.execute(&body.email, &body.password).await?))
}

// ── GET /auth/me ─────────────────────────────────────────────────────────────

pub async fn get_me(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<PrincipalResponse>, MarketplaceError> {
    let uc = LoadUserByIdUseCase {
        users: state.user_repo(),
    };
    let principal = uc.execute(caller.id).await?;
    Ok(Json(PrincipalResponse::from(principal)))
}

// ── POST /auth/oauth2/{registrationId} ───────────────────────────────────────

pub async fn oauth2_login(
    State(state): State<AppState>,
    registration_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<OAuth2LoginRequest>, JsonRejection>,
) -> Result<Json<OAuth2LoginResponse>, MarketplaceError> {
    let registration_id = path_param(registration_id)?;
    let body = json_body(payload)?;
    let uc = OAuth2LoginUseCase {
        users: state.user_repo(),
        attributes: state.oauth2_client.clone(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
        access_token_ttl_secs: state.access_token_ttl_secs,
    };
    let output = uc.execute(&registration_id, &body.access_token).await?;
    Ok(Json(OAuth2LoginResponse {
        token: output.token,
        user: PrincipalResponse::from(output.principal),
    }))
}
