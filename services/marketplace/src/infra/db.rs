use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
    sea_query::{Expr, OnConflict},
};

use quickclick_domain::advert::{AdvertStatus, Category, Currency};
use quickclick_domain::user::{AuthProvider, Role};
use quickclick_marketplace_schema::{adverts, image_data, users, viewed_adverts};

use crate::domain::repository::{AdvertRepository, ImageDataRepository, UserRepository};
use crate::domain::types::{
    Advert, ImageData, NewAdvert, NewImageData, NewUser, User, UserProfileUpdate,
};
use crate::error::MarketplaceError;

// ── Advert repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdvertRepository {
    pub db: DatabaseConnection,
}

impl AdvertRepository for DbAdvertRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Advert>, MarketplaceError> {
        let model = adverts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find advert by id")?;
        Ok(model.map(advert_from_model).transpose()?)
    }

    async fn find_all(&self) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .order_by_asc(adverts::Column::Id)
            .all(&self.db)
            .await
            .context("find all adverts")?;
        adverts_from_models(models)
    }

    async fn find_all_order_by_created_date_desc(&self) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .order_by_desc(adverts::Column::CreatedDate)
            .all(&self.db)
            .await
            .context("find adverts newest first")?;
        adverts_from_models(models)
    }

    async fn find_all_by_user_order_by_created_date_desc(
        &self,
        user_id: i64,
    ) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .filter(adverts::Column::UserId.eq(user_id))
            .order_by_desc(adverts::Column::CreatedDate)
            .all(&self.db)
            .await
            .context("find adverts by user")?;
        adverts_from_models(models)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .filter(adverts::Column::Category.eq(category.as_str()))
            .order_by_desc(adverts::Column::CreatedDate)
            .all(&self.db)
            .await
            .context("find adverts by category")?;
        adverts_from_models(models)
    }

    async fn find_discounted(&self) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .filter(adverts::Column::Discounted.eq(true))
            .order_by_desc(adverts::Column::CreatedDate)
            .all(&self.db)
            .await
            .context("find discounted adverts")?;
        adverts_from_models(models)
    }

    async fn find_promoted(&self) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .filter(adverts::Column::Promoted.eq(true))
            .order_by_desc(adverts::Column::CreatedDate)
            .all(&self.db)
            .await
            .context("find promoted adverts")?;
        adverts_from_models(models)
    }

    async fn find_max_viewed(&self, limit: u64) -> Result<Vec<Advert>, MarketplaceError> {
        let models = adverts::Entity::find()
            .order_by_desc(adverts::Column::ViewQuantity)
            .order_by_asc(adverts::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .context("find most viewed adverts")?;
        adverts_from_models(models)
    }

    async fn save_and_flush(&self, advert: &NewAdvert) -> Result<Advert, MarketplaceError> {
        let model = adverts::ActiveModel {
            title: Set(advert.title.clone()),
            description: Set(advert.description.clone()),
            category: Set(advert.category.as_str().to_owned()),
            status: Set(advert.status.as_str().to_owned()),
            phone: Set(advert.phone.clone()),
            price: Set(advert.price),
            currency: Set(advert.currency.as_str().to_owned()),
            address: Set(advert.address.clone()),
            created_date: Set(advert.created_date),
            user_id: Set(advert.user_id),
            view_quantity: Set(0),
            promoted: Set(advert.promoted),
            discounted: Set(advert.discounted),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert advert")?;
        Ok(advert_from_model(model)?)
    }

    async fn delete(&self, id: i64) -> Result<bool, MarketplaceError> {
        let result = adverts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete advert")?;
        Ok(result.rows_affected > 0)
    }

    async fn record_view(&self, user_id: i64, advert_id: i64) -> Result<(), MarketplaceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    adverts::Entity::update_many()
                        .col_expr(
                            adverts::Column::ViewQuantity,
                            Expr::col(adverts::Column::ViewQuantity).add(1),
                        )
                        .filter(adverts::Column::Id.eq(advert_id))
                        .exec(txn)
                        .await?;

                    viewed_adverts::Entity::insert(viewed_adverts::ActiveModel {
                        user_id: Set(user_id),
                        advert_id: Set(advert_id),
                        viewed_at: Set(Utc::now()),
                    })
                    .on_conflict(
                        OnConflict::columns([
                            viewed_adverts::Column::UserId,
                            viewed_adverts::Column::AdvertId,
                        ])
                        .do_nothing()
                        .to_owned(),
                    )
                    .exec_without_returning(txn)
                    .await?;
                    Ok(())
                })
            })
            .await
            .context("record advert view")?;
        Ok(())
    }
}

fn advert_from_model(model: adverts::Model) -> anyhow::Result<Advert> {
    let category = Category::from_name_ignore_case(&model.category)
        .ok_or_else(|| anyhow!("advert {} has unknown category {}", model.id, model.category))?;
    let status = AdvertStatus::from_name_ignore_case(&model.status)
        .ok_or_else(|| anyhow!("advert {} has unknown status {}", model.id, model.status))?;
    let currency = Currency::from_name_ignore_case(&model.currency)
        .ok_or_else(|| anyhow!("advert {} has unknown currency {}", model.id, model.currency))?;
    Ok(Advert {
        id: model.id,
        title: model.title,
        description: model.description,
        category,
        status,
        phone: model.phone,
        price: model.price,
        currency,
        address: model.address,
        created_date: model.created_date,
        user_id: model.user_id,
        view_quantity: model.view_quantity,
        promoted: model.promoted,
        discounted: model.discounted,
    })
}

fn adverts_from_models(models: Vec<adverts::Model>) -> Result<Vec<Advert>, MarketplaceError> {
    let adverts = models
        .into_iter()
        .map(advert_from_model)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(adverts)
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, MarketplaceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model).transpose()?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MarketplaceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model).transpose()?)
    }

    async fn create(&self, user: &NewUser) -> Result<User, MarketplaceError> {
        let model = users::ActiveModel {
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            password: Set(user.password.clone()),
            image_url: Set(user.image_url.clone()),
            email_verified: Set(user.email_verified),
            provider: Set(user.provider.as_str().to_owned()),
            provider_id: Set(user.provider_id.clone()),
            role: Set(user.role.as_str().to_owned()),
            created_date: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(user_insert_error)?;
        Ok(user_from_model(model)?)
    }

    async fn update_profile(
        &self,
        id: i64,
        update: &UserProfileUpdate,
    ) -> Result<User, MarketplaceError> {
        let model = users::ActiveModel {
            id: Set(id),
            username: Set(update.username.clone()),
            image_url: Set(update.image_url.clone()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user profile")?;
        Ok(user_from_model(model)?)
    }

    async fn find_viewed_adverts(&self, user_id: i64) -> Result<Vec<Advert>, MarketplaceError> {
        let advert_ids: Vec<i64> = viewed_adverts::Entity::find()
            .filter(viewed_adverts::Column::UserId.eq(user_id))
            .order_by_desc(viewed_adverts::Column::ViewedAt)
            .all(&self.db)
            .await
            .context("find viewed advert ids")?
            .into_iter()
            .map(|row| row.advert_id)
            .collect();
        if advert_ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = adverts::Entity::find()
            .filter(adverts::Column::Id.is_in(advert_ids))
            .all(&self.db)
            .await
            .context("find viewed adverts")?;
        adverts_from_models(models)
    }
}

/// A concurrent signup can pass the email check and still lose the race on
/// the unique index; report that as the conflict it is.
fn user_insert_error(err: DbErr) -> MarketplaceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "user insert hit unique constraint");
            MarketplaceError::EmailAlreadyInUse
        }
        _ => MarketplaceError::Internal(anyhow::Error::new(err).context("insert user")),
    }
}

fn user_from_model(model: users::Model) -> anyhow::Result<User> {
    let provider = AuthProvider::from_name_ignore_case(&model.provider)
        .ok_or_else(|| anyhow!("user {} has unknown provider {}", model.id, model.provider))?;
    let role = Role::from_name_ignore_case(&model.role)
        .ok_or_else(|| anyhow!("user {} has unknown role {}", model.id, model.role))?;
    Ok(User {
        id: model.id,
        email: model.email,
        username: model.username,
        password: model.password,
        image_url: model.image_url,
        email_verified: model.email_verified,
        provider,
        provider_id: model.provider_id,
        role,
        created_date: model.created_date,
    })
}

// ── Image repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbImageDataRepository {
    pub db: DatabaseConnection,
}

impl ImageDataRepository for DbImageDataRepository {
    async fn create(&self, image: &NewImageData) -> Result<ImageData, MarketplaceError> {
        let model = image_data::ActiveModel {
            advert_id: Set(image.advert_id),
            name: Set(image.name.clone()),
            content_type: Set(image.content_type.clone()),
            data: Set(image.data.clone()),
            created_date: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert image")?;
        Ok(image_from_model(model))
    }

    async fn find_by_id_and_advert_id(
        &self,
        id: i64,
        advert_id: i64,
    ) -> Result<Option<ImageData>, MarketplaceError> {
        let model = image_data::Entity::find()
            .filter(image_data::Column::Id.eq(id))
            .filter(image_data::Column::AdvertId.eq(advert_id))
            .one(&self.db)
            .await
            .context("find image by id and advert id")?;
        Ok(model.map(image_from_model))
    }

    async fn find_all_by_advert_id(
        &self,
        advert_id: i64,
    ) -> Result<Vec<ImageData>, MarketplaceError> {
        let models = image_data::Entity::find()
            .filter(image_data::Column::AdvertId.eq(advert_id))
            .order_by_asc(image_data::Column::Id)
            .all(&self.db)
            .await
            .context("find images by advert id")?;
        Ok(models.into_iter().map(image_from_model).collect())
    }

    async fn delete_by_id_and_advert_id(
        &self,
        id: i64,
        advert_id: i64,
    ) -> Result<bool, MarketplaceError> {
        let result = image_data::Entity::delete_many()
            .filter(image_data::Column::Id.eq(id))
            .filter(image_data::Column::AdvertId.eq(advert_id))
            .exec(&self.db)
            .await
            .context("delete image")?;
        Ok(result.rows_affected > 0)
    }
}

fn image_from_model(model: image_data::Model) -> ImageData {
    ImageData {
        id: model.id,
        advert_id: model.advert_id,
        name: model.name,
        content_type: model.content_type,
        data: model.data,
        created_date: model.created_date,
    }
}
