//! Transport projections of adverts and the converters between them and the
//! domain records.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quickclick_domain::advert::{AdvertStatus, Category, Currency};

use crate::domain::types::{Advert, NewAdvert};
use crate::error::MarketplaceError;

/// Request body for `POST /adverts`.
///
/// `category`, `status` and `currency` are matched by name ignoring case.
/// `status` defaults to `PUBLISHED` and `currency` to `EUR`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvertCreateDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub discounted: bool,
}

impl AdvertCreateDto {
    /// `true` when both mandatory text fields were sent.
    pub fn has_required_fields(&self) -> bool {
        self.title.is_some() && self.description.is_some()
    }

    /// Validate and convert into an insertable advert owned by `user_id`.
    pub fn into_new_advert(self, user_id: i64) -> Result<NewAdvert, MarketplaceError> {
        let category = Category::from_name_ignore_case(&self.category).ok_or_else(|| {
            MarketplaceError::InvalidArgument(format!(
                "There is no such category: {}",
                self.category
            ))
        })?;
        let status = match self.status.as_deref() {
            None => AdvertStatus::default(),
            Some(name) => AdvertStatus::from_name_ignore_case(name).ok_or_else(|| {
                MarketplaceError::InvalidArgument(format!("There is no such status: {name}"))
            })?,
        };
        let currency = match self.currency.as_deref() {
            None => Currency::default(),
            Some(name) => Currency::from_name_ignore_case(name).ok_or_else(|| {
                MarketplaceError::InvalidArgument(format!("There is no such currency: {name}"))
            })?,
        };

        let title = non_blank(self.title, "title")?;
        let description = non_blank(self.description, "description")?;
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(MarketplaceError::AdvertRegistration(
                "Advert price must not be negative".to_owned(),
            ));
        }

        Ok(NewAdvert {
            title,
            description,
            category,
            status,
            phone: self.phone,
            price: self.price,
            currency,
            address: self.address,
            created_date: Utc::now(),
            user_id,
            promoted: false,
            discounted: self.discounted,
        })
    }
}

fn non_blank(value: Option<String>, field: &str) -> Result<String, MarketplaceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(MarketplaceError::AdvertRegistration(format!(
            "Advert {field} must not be blank"
        ))),
    }
}

/// Full advert view returned to authenticated callers.
///
/// Equality and hashing use `id` only, so a set of these holds each advert
/// once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvertReadDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: AdvertStatus,
    pub phone: Option<String>,
    pub price: Decimal,
    pub currency: Currency,
    pub address: Option<String>,
    #[serde(serialize_with = "quickclick_core::serde::to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
    pub user_id: i64,
    pub view_quantity: i64,
    pub promoted: bool,
    pub discounted: bool,
}

impl PartialEq for AdvertReadDto {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AdvertReadDto {}

impl Hash for AdvertReadDto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<Advert> for AdvertReadDto {
    fn from(advert: Advert) -> Self {
        Self {
            id: advert.id,
            title: advert.title,
            description: advert.description,
            category: advert.category,
            status: advert.status,
            phone: advert.phone,
            price: advert.price,
            currency: advert.currency,
            address: advert.address,
            created_date: advert.created_date,
            user_id: advert.user_id,
            view_quantity: advert.view_quantity,
            promoted: advert.promoted,
            discounted: advert.discounted,
        }
    }
}

/// Public advert view. Leaves out the owner and the contact phone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertReadWithoutAuthDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: AdvertStatus,
    pub price: Decimal,
    pub currency: Currency,
    pub address: Option<String>,
    #[serde(serialize_with = "quickclick_core::serde::to_rfc3339_ms")]
    pub created_date: DateTime<Utc>,
    pub view_quantity: i64,
    pub promoted: bool,
    pub discounted: bool,
}

impl From<Advert> for AdvertReadWithoutAuthDto {
    fn from(advert: Advert) -> Self {
        Self {
            id: advert.id,
            title: advert.title,
            description: advert.description,
            category: advert.category,
            status: advert.status,
            price: advert.price,
            currency: advert.currency,
            address: advert.address,
            created_date: advert.created_date,
            view_quantity: advert.view_quantity,
            promoted: advert.promoted,
            discounted: advert.discounted,
        }
    }
}
