use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use quickclick_domain::advert::{AdvertStatus, Category, Currency};
use quickclick_domain::user::{AuthProvider, Role};

/// A classified listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Advert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: AdvertStatus,
    pub phone: Option<String>,
    pub price: Decimal,
    pub currency: Currency,
    pub address: Option<String>,
    pub created_date: DateTime<Utc>,
    pub user_id: i64,
    pub view_quantity: i64,
    pub promoted: bool,
    pub discounted: bool,
}

/// Validated advert awaiting its first insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAdvert {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: AdvertStatus,
    pub phone: Option<String>,
    pub price: Decimal,
    pub currency: Currency,
    pub address: Option<String>,
    pub created_date: DateTime<Utc>,
    pub user_id: i64,
    pub promoted: bool,
    pub discounted: bool,
}

/// Registered account. Email is the lookup key for authenticated callers.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: Option<String>,
    pub image_url: Option<String>,
    pub email_verified: bool,
    pub provider: AuthProvider,
    pub provider_id: Option<String>,
    pub role: Role,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: Option<String>,
    pub image_url: Option<String>,
    pub email_verified: bool,
    pub provider: AuthProvider,
    pub provider_id: Option<String>,
    pub role: Role,
}

/// Fields an OAuth2 login refreshes on an existing account.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfileUpdate {
    pub username: String,
    pub image_url: Option<String>,
}

/// Stored image attached to an advert.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub id: i64,
    pub advert_id: i64,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewImageData {
    pub advert_id: i64,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Identity resolved from a stored user for login and token issuing.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPrincipal {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password: Option<String>,
    pub role: Role,
    pub provider: AuthProvider,
}

impl From<User> for UserPrincipal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            password: user.password,
            role: user.role,
            provider: user.provider,
        }
    }
}
