use sea_orm::entity::prelude::*;

/// Image payload attached to an advert. Rows cascade with their advert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "image_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub advert_id: i64,
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub created_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::adverts::Entity",
        from = "Column::AdvertId",
        to = "super::adverts::Column::Id"
    )]
    Advert,
}

impl Related<super::adverts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
