use quickclick_auth_types::identity::AuthenticatedUser;

use crate::domain::repository::{AdvertRepository, ImageDataRepository, UserRepository};
use crate::domain::types::{Advert, ImageData, NewImageData};
use crate::error::MarketplaceError;

/// Raster formats accepted for upload. Anything that can carry script
/// (`image/svg+xml`) stays out.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// File part received from a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Load the advert and require the caller to own it.
async fn owned_advert<A: AdvertRepository, U: UserRepository>(
    adverts: &A,
    users: &U,
    advert_id: i64,
    caller: &AuthenticatedUser,
) -> Result<Advert, MarketplaceError> {
    let advert = adverts
        .find_by_id(advert_id)
        .await?
        .ok_or_else(|| MarketplaceError::not_found("Advert", "id", advert_id))?;
    let user = users
        .find_by_email(&caller.email)
        .await?
        .ok_or_else(MarketplaceError::unauthorized_access)?;
    if advert.user_id != user.id {
        return Err(MarketplaceError::unauthorized_access());
    }
    Ok(advert)
}

// ── UploadImage ──────────────────────────────────────────────────────────────

pub struct UploadImageUseCase<A: AdvertRepository, U: UserRepository, I: ImageDataRepository> {
    pub adverts: A,
    pub users: U,
    pub images: I,
}

impl<A: AdvertRepository, U: UserRepository, I: ImageDataRepository>
    UploadImageUseCase<A, U, I>
{
    pub async fn execute(
        &self,
        advert_id: i64,
        upload: ImageUpload,
        caller: &AuthenticatedUser,
    ) -> Result<ImageData, MarketplaceError> {
        let advert = owned_advert(&self.adverts, &self.users, advert_id, caller).await?;

        if upload.data.is_empty() {
            return Err(MarketplaceError::InvalidArgument(
                "Image file must not be empty".to_owned(),
            ));
        }
        if !ALLOWED_IMAGE_TYPES.contains(&upload.content_type.as_str()) {
            return Err(MarketplaceError::InvalidArgument(format!(
                "Unsupported content type: {}",
                upload.content_type
            )));
        }

        let image = self
            .images
            .create(&NewImageData {
                advert_id: advert.id,
                name: upload.name,
                content_type: upload.content_type,
                data: upload.data,
            })
            .await?;
        tracing::debug!(advert_id, image_id = image.id, "image uploaded");
        Ok(image)
    }
}

// ── FindImage ────────────────────────────────────────────────────────────────

pub struct FindImageUseCase<I: ImageDataRepository> {
    pub images: I,
}

impl<I: ImageDataRepository> FindImageUseCase<I> {
    pub async fn execute(
        &self,
        image_id: i64,
        advert_id: i64,
    ) -> Result<ImageData, MarketplaceError> {
        self.images
            .find_by_id_and_advert_id(image_id, advert_id)
            .await?
            .ok_or_else(|| MarketplaceError::not_found("Image", "id", image_id))
    }
}

// ── FindAdvertImageBytes ─────────────────────────────────────────────────────

pub struct FindAdvertImageBytesUseCase<I: ImageDataRepository> {
    pub images: I,
}

impl<I: ImageDataRepository> FindAdvertImageBytesUseCase<I> {
    pub async fn execute(&self, advert_id: i64) -> Result<Vec<Vec<u8>>, MarketplaceError> {
        let images = self.images.find_all_by_advert_id(advert_id).await?;
        tracing::debug!(advert_id, count = images.len(), "found advert images");
        Ok(images.into_iter().map(|image| image.data).collect())
    }
}

// ── DeleteImage ──────────────────────────────────────────────────────────────

pub struct DeleteImageUseCase<A: AdvertRepository, U: UserRepository, I: ImageDataRepository> {
    pub adverts: A,
    pub users: U,
    pub images: I,
}

impl<A: AdvertRepository, U: UserRepository, I: ImageDataRepository>
    DeleteImageUseCase<A, U, I>
{
    pub async fn execute(
        &self,
        image_id: i64,
        advert_id: i64,
        caller: &AuthenticatedUser,
    ) -> Result<(), MarketplaceError> {
        owned_advert(&self.adverts, &self.users, advert_id, caller).await?;
        if !self
            .images
            .delete_by_id_and_advert_id(image_id, advert_id)
            .await?
        {
            return Err(MarketplaceError::not_found("Image", "id", image_id));
        }
        tracing::debug!(advert_id, image_id, "image deleted");
        Ok(())
    }
}
