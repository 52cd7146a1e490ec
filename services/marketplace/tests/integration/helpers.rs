#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use quickclick_auth_types::identity::AuthenticatedUser;
use quickclick_domain::advert::{AdvertStatus, Category, Currency};
use quickclick_domain::user::{AuthProvider, Role};
use quickclick_marketplace::domain::dto::AdvertCreateDto;
use quickclick_marketplace::domain::oauth2::{OAuth2Attributes, OAuth2Provider};
use quickclick_marketplace::domain::repository::{
    AdvertRepository, ImageDataRepository, OAuth2AttributesPort, UserRepository,
};
use quickclick_marketplace::domain::types::{
    Advert, ImageData, NewAdvert, NewImageData, NewUser, User, UserProfileUpdate,
};
use quickclick_marketplace::error::MarketplaceError;

// ── MockAdvertRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAdvertRepo {
    pub adverts: Arc<Mutex<Vec<Advert>>>,
    pub viewed: Arc<Mutex<Vec<(i64, i64)>>>,
    pub saves: Arc<Mutex<Vec<NewAdvert>>>,
    pub fail_save: bool,
    /// Return every row from `find_max_viewed`, ignoring `limit`.
    pub ignore_limit: bool,
}

impl MockAdvertRepo {
    pub fn new(adverts: Vec<Advert>) -> Self {
        Self {
            adverts: Arc::new(Mutex::new(adverts)),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Default::default()
        }
    }

    fn filtered(&self, keep: impl Fn(&Advert) -> bool) -> Vec<Advert> {
        self.adverts
            .lock()
            .unwrap()
            .iter()
            .filter(|a| keep(a))
            .cloned()
            .collect()
    }
}

impl AdvertRepository for MockAdvertRepo {
    async fn find_by_id(&self, id: i64) -> Result<Option<Advert>, MarketplaceError> {
        Ok(self.filtered(|a| a.id == id).into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Advert>, MarketplaceError> {
        Ok(self.filtered(|_| true))
    }

    async fn find_all_order_by_created_date_desc(&self) -> Result<Vec<Advert>, MarketplaceError> {
        let mut adverts = self.filtered(|_| true);
        adverts.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(adverts)
    }

    async fn find_all_by_user_order_by_created_date_desc(
        &self,
        user_id: i64,
    ) -> Result<Vec<Advert>, MarketplaceError> {
        let mut adverts = self.filtered(|a| a.user_id == user_id);
        adverts.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(adverts)
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Advert>, MarketplaceError> {
        Ok(self.filtered(|a| a.category == category))
    }

    async fn find_discounted(&self) -> Result<Vec<Advert>, MarketplaceError> {
        Ok(self.filtered(|a| a.discounted))
    }

    async fn find_promoted(&self) -> Result<Vec<Advert>, MarketplaceError> {
        Ok(self.filtered(|a| a.promoted))
    }

    async fn find_max_viewed(&self, limit: u64) -> Result<Vec<Advert>, MarketplaceError> {
        let mut adverts = self.filtered(|_| true);
        adverts.sort_by(|a, b| b.view_quantity.cmp(&a.view_quantity));
        if !self.ignore_limit {
            adverts.truncate(limit as usize);
        }
        Ok(adverts)
    }

    async fn save_and_flush(&self, advert: &NewAdvert) -> Result<Advert, MarketplaceError> {
        if self.fail_save {
            return Err(MarketplaceError::Internal(anyhow::anyhow!("insert failed")));
        }
        self.saves.lock().unwrap().push(advert.clone());
        let mut adverts = self.adverts.lock().unwrap();
        let id = adverts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let stored = Advert {
            id,
            title: advert.title.clone(),
            description: advert.description.clone(),
            category: advert.category,
            status: advert.status,
            phone: advert.phone.clone(),
            price: advert.price,
            currency: advert.currency,
            address: advert.address.clone(),
            created_date: advert.created_date,
            user_id: advert.user_id,
            view_quantity: 0,
            promoted: advert.promoted,
            discounted: advert.discounted,
        };
        adverts.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool, MarketplaceError> {
        let mut adverts = self.adverts.lock().unwrap();
        let before = adverts.len();
        adverts.retain(|a| a.id != id);
        Ok(adverts.len() < before)
    }

    async fn record_view(&self, user_id: i64, advert_id: i64) -> Result<(), MarketplaceError> {
        if let Some(advert) = self
            .adverts
            .lock()
            .unwrap()
            .iter_mut()
            .find(|a| a.id == advert_id)
        {
            advert.view_quantity += 1;
        }
        let mut viewed = self.viewed.lock().unwrap();
        if !viewed.contains(&(user_id, advert_id)) {
            viewed.push((user_id, advert_id));
        }
        Ok(())
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    /// Rows returned by `find_viewed_adverts`, repeats included.
    pub viewed: Vec<Advert>,
    /// `create` fails the way a unique-index race does in the store.
    pub conflict_on_create: bool,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_viewed(mut self, viewed: Vec<Advert>) -> Self {
        self.viewed = viewed;
        self
    }

    /// Returns a shared handle to the stored users for post-execution inspection.
    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, MarketplaceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, MarketplaceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, MarketplaceError> {
        if self.conflict_on_create {
            return Err(MarketplaceError::EmailAlreadyInUse);
        }
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let stored = User {
            id,
            email: user.email.clone(),
            username: user.username.clone(),
            password: user.password.clone(),
            image_url: user.image_url.clone(),
            email_verified: user.email_verified,
            provider: user.provider,
            provider_id: user.provider_id.clone(),
            role: user.role,
            created_date: Utc::now(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update_profile(
        &self,
        id: i64,
        update: &UserProfileUpdate,
    ) -> Result<User, MarketplaceError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| MarketplaceError::Internal(anyhow::anyhow!("no user {id}")))?;
        user.username = update.username.clone();
        user.image_url = update.image_url.clone();
        Ok(user.clone())
    }

    async fn find_viewed_adverts(&self, _user_id: i64) -> Result<Vec<Advert>, MarketplaceError> {
        Ok(self.viewed.clone())
    }
}

// ── MockImageRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockImageRepo {
    pub images: Arc<Mutex<Vec<ImageData>>>,
}

impl MockImageRepo {
    pub fn new(images: Vec<ImageData>) -> Self {
        Self {
            images: Arc::new(Mutex::new(images)),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn images_handle(&self) -> Arc<Mutex<Vec<ImageData>>> {
        Arc::clone(&self.images)
    }
}

impl ImageDataRepository for MockImageRepo {
    async fn create(&self, image: &NewImageData) -> Result<ImageData, MarketplaceError> {
        let mut images = self.images.lock().unwrap();
        let id = images.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let stored = ImageData {
            id,
            advert_id: image.advert_id,
            name: image.name.clone(),
            content_type: image.content_type.clone(),
            data: image.data.clone(),
            created_date: Utc::now(),
        };
        images.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id_and_advert_id(
        &self,
        id: i64,
        advert_id: i64,
    ) -> Result<Option<ImageData>, MarketplaceError> {
        Ok(self
            .images
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id && i.advert_id == advert_id)
            .cloned())
    }

    async fn find_all_by_advert_id(
        &self,
        advert_id: i64,
    ) -> Result<Vec<ImageData>, MarketplaceError> {
        Ok(self
            .images
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.advert_id == advert_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id_and_advert_id(
        &self,
        id: i64,
        advert_id: i64,
    ) -> Result<bool, MarketplaceError> {
        let mut images = self.images.lock().unwrap();
        let before = images.len();
        images.retain(|i| !(i.id == id && i.advert_id == advert_id));
        Ok(images.len() < before)
    }
}

// ── MockOAuth2Port ───────────────────────────────────────────────────────────

pub struct MockOAuth2Port {
    pub attributes: OAuth2Attributes,
    pub reject: bool,
}

impl MockOAuth2Port {
    pub fn returning(attributes: serde_json::Value) -> Self {
        let attributes = match attributes {
            serde_json::Value::Object(map) => map,
            other => panic!("attributes must be an object, got {other}"),
        };
        Self {
            attributes,
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            attributes: OAuth2Attributes::new(),
            reject: true,
        }
    }
}

impl OAuth2AttributesPort for MockOAuth2Port {
    async fn fetch_attributes(
        &self,
        _provider: OAuth2Provider,
        _access_token: &str,
    ) -> Result<OAuth2Attributes, MarketplaceError> {
        if self.reject {
            return Err(MarketplaceError::OAuth2AuthenticationProcessing(
                "OAuth2 provider rejected the access token".to_owned(),
            ));
        }
        Ok(self.attributes.clone())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub fn test_user(id: i64, email: &str) -> User {
    User {
        id,
        email: email.to_owned(),
        username: email.split('@').next().unwrap_or(email).to_owned(),
        password: None,
        image_url: None,
        email_verified: false,
        provider: AuthProvider::Local,
        provider_id: None,
        role: Role::User,
        created_date: Utc::now(),
    }
}

pub fn caller(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
    }
}

/// Advert owned by `user_id`, created `age_minutes` ago.
pub fn test_advert(id: i64, user_id: i64, age_minutes: i64) -> Advert {
    Advert {
        id,
        title: format!("Advert {id}"),
        description: "description a toy Big dog".to_owned(),
        category: Category::Toys,
        status: AdvertStatus::Published,
        phone: Some("+380507778855".to_owned()),
        price: Decimal::new(10000, 2),
        currency: Currency::Eur,
        address: Some("Dania".to_owned()),
        created_date: Utc::now() - Duration::minutes(age_minutes),
        user_id,
        view_quantity: 0,
        promoted: false,
        discounted: false,
    }
}

pub fn create_dto() -> AdvertCreateDto {
    AdvertCreateDto {
        title: Some("Big dog".to_owned()),
        description: Some("description a toy Big dog".to_owned()),
        category: "TOYS".to_owned(),
        status: Some("PUBLISHED".to_owned()),
        phone: Some("+380507778855".to_owned()),
        price: Decimal::new(10000, 2),
        currency: Some("EUR".to_owned()),
        address: Some("Dania".to_owned()),
        discounted: false,
    }
}

pub fn test_image(id: i64, advert_id: i64, data: &[u8]) -> ImageData {
    ImageData {
        id,
        advert_id,
        name: format!("image-{id}.png"),
        content_type: "image/png".to_owned(),
        data: data.to_vec(),
        created_date: Utc::now(),
    }
}
