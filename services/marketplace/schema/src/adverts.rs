use sea_orm::entity::prelude::*;

/// Classified listing. `category`, `status` and `currency` hold the enum
/// names in upper case.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "adverts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub status: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    pub currency: String,
    pub address: Option<String>,
    pub created_date: chrono::DateTime<chrono::Utc>,
    pub user_id: i64,
    pub view_quantity: i64,
    pub promoted: bool,
    pub discounted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::image_data::Entity")]
    ImageData,
    #[sea_orm(has_many = "super::viewed_adverts::Entity")]
    ViewedAdverts,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::image_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ImageData.def()
    }
}

impl Related<super::viewed_adverts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ViewedAdverts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
