//! Advert domain enumerations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of advert categories.
///
/// Lookup by name is case-insensitive: `"toys"`, `"Toys"` and `"TOYS"` all
/// resolve to [`Category::Toys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electronics,
    Clothes,
    Home,
    Toys,
    Sport,
    Auto,
    Books,
    Pets,
    Services,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Self::Electronics,
        Self::Clothes,
        Self::Home,
        Self::Toys,
        Self::Sport,
        Self::Auto,
        Self::Books,
        Self::Pets,
        Self::Services,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "ELECTRONICS",
            Self::Clothes => "CLOTHES",
            Self::Home => "HOME",
            Self::Toys => "TOYS",
            Self::Sport => "SPORT",
            Self::Auto => "AUTO",
            Self::Books => "BOOKS",
            Self::Pets => "PETS",
            Self::Services => "SERVICES",
            Self::Other => "OTHER",
        }
    }

    /// Returns `None` when no category carries that name.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of an advert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvertStatus {
    #[default]
    Published,
    Archived,
}

impl AdvertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }

    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        [Self::Published, Self::Archived]
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AdvertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency an advert price is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Uah,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Uah => "UAH",
        }
    }

    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        [Self::Eur, Self::Usd, Self::Uah]
            .into_iter()
            .find(|currency| currency.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
