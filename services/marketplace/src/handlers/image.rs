use axum::{
    Json,
    extract::{Multipart, Path, State, rejection::PathRejection},
    http::{HeaderName, StatusCode, header},
    response::IntoResponse,
};
use serde::{Serialize, Serializer};

use quickclick_auth_types::identity::AuthenticatedUser;

use crate::domain::types::ImageData;
use crate::error::MarketplaceError;
use crate::handlers::{multipart_error, path_param};
use crate::state::AppState;
use crate::usecase::image::{
    ALLOWED_IMAGE_TYPES, DeleteImageUseCase, FindAdvertImageBytesUseCase, FindImageUseCase,
    ImageUpload, UploadImageUseCase,
};

/// Multipart field carrying the image file.
const FILE_FIELD: &str = "file";

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ImageMetadataResponse {
    pub id: i64,
    pub advert_id: i64,
    pub name: String,
    pub content_type: String,
    pub size: usize,
    #[serde(serialize_with = "quickclick_core::serde::to_rfc3339_ms")]
    pub created_date: chrono::DateTime<chrono::Utc>,
}

impl From<ImageData> for ImageMetadataResponse {
    fn from(image: ImageData) -> Self {
        Self {
            id: image.id,
            advert_id: image.advert_id,
            name: image.name,
            content_type: image.content_type,
            size: image.data.len(),
            created_date: image.created_date,
        }
    }
}

/// Image payloads rendered as a JSON array of base64 strings.
pub struct Base64Images(pub Vec<Vec<u8>>);

impl Serialize for Base64Images {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        quickclick_core::serde::to_base64_list(&self.0, serializer)
    }
}

// ── POST /adverts/{id}/images ────────────────────────────────────────────────

pub async fn upload_image(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
    advert_id: Result<Path<i64>, PathRejection>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ImageMetadataResponse>), MarketplaceError> {
    let advert_id = path_param(advert_id)?;
    let upload = read_file_field(&mut multipart).await?;

    let uc = UploadImageUseCase {
        adverts: state.advert_repo(),
        users: state.user_repo(),
        images: state.image_repo(),
    };
    let image = uc.execute(advert_id, upload, &caller).await?;
    Ok((StatusCode::CREATED, Json(ImageMetadataResponse::from(image))))
}

async fn read_file_field(multipart: &mut Multipart) -> Result<ImageUpload, MarketplaceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = field.file_name().unwrap_or(FILE_FIELD).to_owned();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_owned();
        let data = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        return Ok(ImageUpload {
            name,
            content_type,
            data: data.to_vec(),
        });
    }
    Err(MarketplaceError::InvalidArgument(format!(
        "Missing multipart field: {FILE_FIELD}"
    )))
}

// ── GET /adverts/{id}/images ─────────────────────────────────────────────────

pub async fn find_advert_images(
    State(state): State<AppState>,
    advert_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Base64Images>, MarketplaceError> {
    let advert_id = path_param(advert_id)?;
    let uc = FindAdvertImageBytesUseCase {
        images: state.image_repo(),
    };
    Ok(Json(Base64Images(uc.execute(advert_id).await?)))
}

// ── GET /adverts/{id}/images/{imageId} ───────────────────────────────────────

pub async fn find_image(
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<impl IntoResponse, MarketplaceError> {
    let (advert_id, image_id) = path_param(ids)?;
    let uc = FindImageUseCase {
        images: state.image_repo(),
    };
    let image = uc.execute(image_id, advert_id).await?;
    Ok((image_headers(&image), image.data))
}

/// Headers for serving stored bytes from the API origin. Rows whose type is
/// not on the upload allow-list go out as opaque downloads.
fn image_headers(image: &ImageData) -> [(HeaderName, String); 3] {
    let content_type = if ALLOWED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
        image.content_type.clone()
    } else {
        "application/octet-stream".to_owned()
    };
    // Keep the quoted filename to a header-safe subset.
    let file_name: String = image
        .name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    [
        (header::CONTENT_TYPE, content_type),
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff".to_owned()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{file_name}\""),
        ),
    ]
}

// ── DELETE /adverts/{id}/images/{imageId} ────────────────────────────────────

pub async fn delete_image(
    caller: AuthenticatedUser,
    State(state): State<AppState>,
    ids: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<StatusCode, MarketplaceError> {
    let (advert_id, image_id) = path_param(ids)?;
    let uc = DeleteImageUseCase {
        adverts: state.advert_repo(),
        users: state.user_repo(),
        images: state.image_repo(),
    };
    uc.execute(image_id, advert_id, &caller).await?;
    Ok(StatusCode::NO_CONTENT)
}
