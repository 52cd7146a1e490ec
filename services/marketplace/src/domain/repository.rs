#![allow(async_fn_in_trait)]

use crate::domain::oauth2::{OAuth2Attributes, OAuth2Provider};
use crate::domain::types::{
    Advert, ImageData, NewAdvert, NewImageData, NewUser, User, UserProfileUpdate,
};
use crate::error::MarketplaceError;
use quickclick_domain::advert::Category;

/// Repository for adverts.
pub trait AdvertRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Advert>, MarketplaceError>;
    async fn find_all(&self) -> Result<Vec<Advert>, MarketplaceError>;
    async fn find_all_order_by_created_date_desc(&self) -> Result<Vec<Advert>, MarketplaceError>;
    async fn find_all_by_user_order_by_created_date_desc(
        &self,
        user_id: i64,
    ) -> Result<Vec<Advert>, MarketplaceError>;
    async fn find_by_category(&self, category: Category) -> Result<Vec<Advert>, MarketplaceError>;
    async fn find_discounted(&self) -> Result<Vec<Advert>, MarketplaceError>;
    async fn find_promoted(&self) -> Result<Vec<Advert>, MarketplaceError>;

    /// Adverts ordered by view count, highest first, at most `limit` rows.
    async fn find_max_viewed(&self, limit: u64) -> Result<Vec<Advert>, MarketplaceError>;

    /// Insert and return the stored row with its generated id.
    async fn save_and_flush(&self, advert: &NewAdvert) -> Result<Advert, MarketplaceError>;

    /// Delete an advert. Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, MarketplaceError>;

    /// Increment the view count and remember that `user_id` saw the advert.
    /// Seeing the same advert again still counts but adds no second pair.
    async fn record_view(&self, user_id: i64, advert_id: i64) -> Result<(), MarketplaceError>;
}

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, MarketplaceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MarketplaceError>;
    async fn create(&self, user: &NewUser) -> Result<User, MarketplaceError>;
    async fn update_profile(
        &self,
        id: i64,
        update: &UserProfileUpdate,
    ) -> Result<User, MarketplaceError>;

    /// Adverts the user has viewed. May repeat an advert.
    async fn find_viewed_adverts(&self, user_id: i64) -> Result<Vec<Advert>, MarketplaceError>;
}

/// Repository for advert images.
pub trait ImageDataRepository: Send + Sync {
    async fn create(&self, image: &NewImageData) -> Result<ImageData, MarketplaceError>;
    async fn find_by_id_and_advert_id(
        &self,
        id: i64,
        advert_id: i64,
    ) -> Result<Option<ImageData>, MarketplaceError>;
    async fn find_all_by_advert_id(
        &self,
        advert_id: i64,
    ) -> Result<Vec<ImageData>, MarketplaceError>;

    /// Returns `true` if a row was deleted.
    async fn delete_by_id_and_advert_id(
        &self,
        id: i64,
        advert_id: i64,
    ) -> Result<bool, MarketplaceError>;
}

/// Outbound port to a provider's user-info endpoint.
pub trait OAuth2AttributesPort: Send + Sync {
    async fn fetch_attributes(
        &self,
        provider: OAuth2Provider,
        access_token: &str,
    ) -> Result<OAuth2Attributes, MarketplaceError>;
}
