use quickclick_auth_types::identity::AuthenticatedUser;
use quickclick_domain::user::Role;

use crate::domain::repository::{AdvertRepository, UserRepository};
use crate::error::MarketplaceError;

// ── RecordAdvertView ─────────────────────────────────────────────────────────

pub struct RecordAdvertViewUseCase<A: AdvertRepository, U: UserRepository> {
    pub adverts: A,
    pub users: U,
}

impl<A: AdvertRepository, U: UserRepository> RecordAdvertViewUseCase<A, U> {
    pub async fn execute(
        &self,
        advert_id: i64,
        caller: &AuthenticatedUser,
    ) -> Result<(), MarketplaceError> {
        let user = self
            .users
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(MarketplaceError::unauthorized_access)?;
        if self.adverts.find_by_id(advert_id).await?.is_none() {
            return Err(MarketplaceError::not_found("Advert", "id", advert_id));
        }
        self.adverts.record_view(user.id, advert_id).await?;
        tracing::debug!(advert_id, user_id = user.id, "advert view recorded");
        Ok(())
    }
}

// ── DeleteAdvert ─────────────────────────────────────────────────────────────

pub struct DeleteAdvertUseCase<A: AdvertRepository, U: UserRepository> {
    pub adverts: A,
    pub users: U,
}

impl<A: AdvertRepository, U: UserRepository> DeleteAdvertUseCase<A, U> {
    /// Owners delete their own adverts; admins may delete any.
    pub async fn execute(
        &self,
        advert_id: i64,
        caller: &AuthenticatedUser,
    ) -> Result<(), MarketplaceError> {
        let advert = self
            .adverts
            .find_by_id(advert_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Advert", "id", advert_id))?;
        let user = self
            .users
            .find_by_email(&caller.email)
            .await?
            .ok_or_else(MarketplaceError::unauthorized_access)?;
        if advert.user_id != user.id && !user.role.has_role(Role::Admin) {
            return Err(MarketplaceError::unauthorized_access());
        }
        if !self.adverts.delete(advert_id).await? {
            return Err(MarketplaceError::not_found("Advert", "id", advert_id));
        }
        tracing::debug!(advert_id, user_id = user.id, "advert deleted");
        Ok(())
    }
}
