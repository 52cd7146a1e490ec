use quickclick_auth_types::identity::AuthenticatedUser;

use crate::domain::dto::{AdvertCreateDto, AdvertReadDto};
use crate::domain::repository::{AdvertRepository, UserRepository};
use crate::error::MarketplaceError;

// ── RegisterAdvert ───────────────────────────────────────────────────────────

pub struct RegisterAdvertUseCase<A: AdvertRepository, U: UserRepository> {
    pub adverts: A,
    pub users: U,
}

impl<A: AdvertRepository, U: UserRepository> RegisterAdvertUseCase<A, U> {
    /// Persist a new advert owned by the caller.
    ///
    /// The caller is resolved by email before anything is converted, and the
    /// advert is converted before anything is written. A failed write yields
    /// no read view.
    pub async fn execute(
        &self,
        dto: AdvertCreateDto,
        caller: &AuthenticatedUser,
    ) -> Result<AdvertReadDto, MarketplaceError> {
        let user = self
            .users
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("User", "email", &caller.email))?;

        let new_advert = dto.into_new_advert(user.id)?;
        let advert = self.adverts.save_and_flush(&new_advert).await?;

        tracing::debug!(advert_id = advert.id, user_id = user.id, "advert registered");
        Ok(AdvertReadDto::from(advert))
    }
}
