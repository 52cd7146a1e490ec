use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Adverts::Table)
                    .col(Adverts::UserId)
                    .col(Adverts::CreatedDate)
                    .name("idx_adverts_user_id_created_date")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Adverts::Table)
                    .col(Adverts::Category)
                    .name("idx_adverts_category")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Adverts::Table)
                    .col(Adverts::ViewQuantity)
                    .name("idx_adverts_view_quantity")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_adverts_view_quantity").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_adverts_category").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_adverts_user_id_created_date")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Adverts {
    Table,
    UserId,
    CreatedDate,
    Category,
    ViewQuantity,
}
