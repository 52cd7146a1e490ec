use sea_orm::entity::prelude::*;

/// Account record. `provider` and `role` hold the enum names
/// (`LOCAL`/`GOOGLE`, `USER`/`ADMIN`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    /// Argon2 PHC string; `None` for OAuth2 accounts.
    pub password: Option<String>,
    pub image_url: Option<String>,
    pub email_verified: bool,
    pub provider: String,
    pub provider_id: Option<String>,
    pub role: String,
    pub created_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::adverts::Entity")]
    Adverts,
    #[sea_orm(has_many = "super::viewed_adverts::Entity")]
    ViewedAdverts,
}

impl Related<super::adverts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Adverts.def()
    }
}

impl Related<super::viewed_adverts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ViewedAdverts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
