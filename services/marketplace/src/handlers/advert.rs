use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use quickclick_auth_types::identity::AuthenticatedUser;
use quickclick_domain::user::Role;

use crate::domain::dto::{AdvertCreateDto, AdvertReadDto, AdvertReadWithoutAuthDto};
use crate::error::MarketplaceError;
use crate::handlers::{json_body, path_param};
use crate::state::AppState;
use crate::usecase::advert_registration::RegisterAdvertUseCase;
use crate::usecase::advert_search::{
    FindAdvertByIdUseCase, FindAdvertsByCategoryUseCase, FindAdvertsByUserUseCase,
    FindAllAdvertsNewestFirstUseCase, FindAllAdvertsUseCase, FindDiscountedAdvertsUseCase,
    FindMostViewedAdvertsUseCase, FindPromotedAdvertsUseCase, FindViewedAdvertsUseCase,
};
use crate::usecase::advert_view::{DeleteAdvertUseCase, RecordAdvertViewUseCase};

// ── GET /adverts ─────────────────────────────────────────────────────────────

pub async fn find_all_adverts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadWithoutAuthDto>>, MarketplaceError> {
    let uc = FindAllAdvertsUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── GET /adverts/{id} ────────────────────────────────────────────────────────

pub async fn find_advert_by_id(
    State(state): State<AppState>,
    advert_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AdvertReadWithoutAuthDto>, MarketplaceError> {
    let advert_id = path_param(advert_id)?;
    let uc = FindAdvertByIdUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute(advert_id).await?))
}

// ── POST /adverts ────────────────────────────────────────────────────────────

pub async fn register_advert(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
    payload: Result<Json<AdvertCreateDto>, JsonRejection>,
) -> Result<(StatusCode, Json<AdvertReadDto>), MarketplaceError> {
    // Exact match: ADMIN does not imply USER for posting.
    if caller.role != Role::User {
        return Err(MarketplaceError::Forbidden);
    }
    let dto = json_body(payload)?;
    if !dto.has_required_fields() {
        return Err(MarketplaceError::MissingFields);
    }

    let uc = RegisterAdvertUseCase {
        adverts: state.advert_repo(),
        users: state.user_repo(),
    };
    let advert = uc.execute(dto, &caller).await?;
    Ok((StatusCode::CREATED, Json(advert)))
}

// ── DELETE /adverts/{id} ─────────────────────────────────────────────────────

pub async fn delete_advert(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
    advert_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, MarketplaceError> {
    let advert_id = path_param(advert_id)?;
    let uc = DeleteAdvertUseCase {
        adverts: state.advert_repo(),
        users: state.user_repo(),
    };
    uc.execute(advert_id, &caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /adverts/newest ──────────────────────────────────────────────────────

pub async fn find_adverts_newest_first(
    _caller: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadDto>>, MarketplaceError> {
    let uc = FindAllAdvertsNewestFirstUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── GET /adverts/my ──────────────────────────────────────────────────────────

pub async fn find_my_adverts(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadDto>>, MarketplaceError> {
    let uc = FindAdvertsByUserUseCase {
        adverts: state.advert_repo(),
        users: state.user_repo(),
    };
    Ok(Json(uc.execute(&caller).await?))
}

// ── GET /adverts/viewed ──────────────────────────────────────────────────────

pub async fn find_viewed_adverts(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadDto>>, MarketplaceError> {
    let uc = FindViewedAdvertsUseCase {
        users: state.user_repo(),
    };
    let mut viewed: Vec<AdvertReadDto> = uc.execute(&caller).await?.into_iter().collect();
    viewed.sort_by_key(|advert| advert.id);
    Ok(Json(viewed))
}

// ── GET /adverts/category/{category} ─────────────────────────────────────────

pub async fn find_adverts_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<AdvertReadWithoutAuthDto>>, MarketplaceError> {
    let category = path_param(category)?;
    let uc = FindAdvertsByCategoryUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute(&category).await?))
}

// ── GET /adverts/discounted ──────────────────────────────────────────────────

pub async fn find_discounted_adverts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadWithoutAuthDto>>, MarketplaceError> {
    let uc = FindDiscountedAdvertsUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── GET /adverts/promoted ────────────────────────────────────────────────────

pub async fn find_promoted_adverts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadWithoutAuthDto>>, MarketplaceError> {
    let uc = FindPromotedAdvertsUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── GET /adverts/most-viewed ─────────────────────────────────────────────────

pub async fn find_most_viewed_adverts(
    State(state): State<AppState>,
) -> Result<Json<Vec<AdvertReadWithoutAuthDto>>, MarketplaceError> {
    let uc = FindMostViewedAdvertsUseCase {
        adverts: state.advert_repo(),
    };
    Ok(Json(uc.execute().await?))
}

// ── POST /adverts/{id}/views ─────────────────────────────────────────────────

pub async fn record_advert_view(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
    advert_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, MarketplaceError> {
    let advert_id = path_param(advert_id)?;
    let uc = RecordAdvertViewUseCase {
        adverts: state.advert_repo(),
        users: state.user_repo(),
    };
    uc.execute(advert_id, &caller).await?;
    Ok(StatusCode::NO_CONTENT)
}
