use std::collections::HashSet;

use quickclick_auth_types::identity::AuthenticatedUser;
use quickclick_domain::advert::Category;

use crate::domain::dto::{AdvertReadDto, AdvertReadWithoutAuthDto};
use crate::domain::repository::{AdvertRepository, UserRepository};
use crate::domain::types::Advert;
use crate::error::MarketplaceError;

/// Upper bound on the most-viewed list.
pub const MAX_VIEWED_LIMIT: u64 = 10;

fn public_views(adverts: Vec<Advert>) -> Vec<AdvertReadWithoutAuthDto> {
    adverts
        .into_iter()
        .map(AdvertReadWithoutAuthDto::from)
        .collect()
}

// ── FindAdvertById ───────────────────────────────────────────────────────────

pub struct FindAdvertByIdUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindAdvertByIdUseCase<A> {
    pub async fn execute(
        &self,
        advert_id: i64,
    ) -> Result<AdvertReadWithoutAuthDto, MarketplaceError> {
        let advert = self
            .adverts
            .find_by_id(advert_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Advert", "id", advert_id))?;
        tracing::debug!(advert_id, "found advert by id");
        Ok(AdvertReadWithoutAuthDto::from(advert))
    }
}

// ── FindAllAdverts ───────────────────────────────────────────────────────────

pub struct FindAllAdvertsUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindAllAdvertsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AdvertReadWithoutAuthDto>, MarketplaceError> {
        let adverts = self.adverts.find_all().await?;
        tracing::debug!(count = adverts.len(), "found all adverts");
        Ok(public_views(adverts))
    }
}

// ── FindAllAdvertsNewestFirst ────────────────────────────────────────────────

pub struct FindAllAdvertsNewestFirstUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindAllAdvertsNewestFirstUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AdvertReadDto>, MarketplaceError> {
        let adverts = self.adverts.find_all_order_by_created_date_desc().await?;
        tracing::debug!(count = adverts.len(), "found adverts newest first");
        Ok(adverts.into_iter().map(AdvertReadDto::from).collect())
    }
}

// ── FindAdvertsByUser ────────────────────────────────────────────────────────

pub struct FindAdvertsByUserUseCase<A: AdvertRepository, U: UserRepository> {
    pub adverts: A,
    pub users: U,
}

impl<A: AdvertRepository, U: UserRepository> FindAdvertsByUserUseCase<A, U> {
    /// The caller's own adverts, newest first.
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<AdvertReadDto>, MarketplaceError> {
        let user = self
            .users
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(MarketplaceError::unauthorized_access)?;
        let adverts = self
            .adverts
            .find_all_by_user_order_by_created_date_desc(user.id)
            .await?;
        tracing::debug!(user_id = user.id, count = adverts.len(), "found adverts by user");
        Ok(adverts.into_iter().map(AdvertReadDto::from).collect())
    }
}

// ── FindAdvertsByCategory ────────────────────────────────────────────────────

pub struct FindAdvertsByCategoryUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindAdvertsByCategoryUseCase<A> {
    pub async fn execute(
        &self,
        category_name: &str,
    ) -> Result<Vec<AdvertReadWithoutAuthDto>, MarketplaceError> {
        let category = find_category_by_name(category_name)?;
        let adverts = self.adverts.find_by_category(category).await?;
        tracing::debug!(%category, count = adverts.len(), "found adverts by category");
        Ok(public_views(adverts))
    }
}

/// Case-insensitive category lookup.
pub fn find_category_by_name(name: &str) -> Result<Category, MarketplaceError> {
    Category::from_name_ignore_case(name).ok_or_else(|| {
        MarketplaceError::InvalidArgument(format!("There is no such category: {name}"))
    })
}

// ── FindDiscountedAdverts ────────────────────────────────────────────────────

pub struct FindDiscountedAdvertsUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindDiscountedAdvertsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AdvertReadWithoutAuthDto>, MarketplaceError> {
        let adverts = self.adverts.find_discounted().await?;
        tracing::debug!(count = adverts.len(), "found discounted adverts");
        Ok(public_views(adverts))
    }
}

// ── FindPromotedAdverts ──────────────────────────────────────────────────────

pub struct FindPromotedAdvertsUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindPromotedAdvertsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AdvertReadWithoutAuthDto>, MarketplaceError> {
        let adverts = self.adverts.find_promoted().await?;
        tracing::debug!(count = adverts.len(), "found promoted adverts");
        Ok(public_views(adverts))
    }
}

// ── FindMostViewedAdverts ────────────────────────────────────────────────────

pub struct FindMostViewedAdvertsUseCase<A: AdvertRepository> {
    pub adverts: A,
}

impl<A: AdvertRepository> FindMostViewedAdvertsUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AdvertReadWithoutAuthDto>, MarketplaceError> {
        let mut adverts = self.adverts.find_max_viewed(MAX_VIEWED_LIMIT).await?;
        adverts.truncate(MAX_VIEWED_LIMIT as usize);
        tracing::debug!(count = adverts.len(), "found most viewed adverts");
        Ok(public_views(adverts))
    }
}

// ── FindViewedAdverts ────────────────────────────────────────────────────────

pub struct FindViewedAdvertsUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> FindViewedAdvertsUseCase<U> {
    /// Distinct adverts the caller has viewed.
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<HashSet<AdvertReadDto>, MarketplaceError> {
        let user = self
            .users
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(MarketplaceError::unauthorized_access)?;
        let viewed: HashSet<AdvertReadDto> = self
            .users
            .find_viewed_adverts(user.id)
            .await?
            .into_iter()
            .map(AdvertReadDto::from)
            .collect();
        tracing::debug!(user_id = user.id, count = viewed.len(), "found viewed adverts");
        Ok(viewed)
    }
}
