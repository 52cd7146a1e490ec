use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImageData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageData::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageData::AdvertId).big_integer().not_null())
                    .col(ColumnDef::new(ImageData::Name).string().not_null())
                    .col(ColumnDef::new(ImageData::ContentType).string().not_null())
                    .col(ColumnDef::new(ImageData::Data).binary().not_null())
                    .col(
                        ColumnDef::new(ImageData::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ImageData::Table, ImageData::AdvertId)
                            .to(Adverts::Table, Adverts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ImageData::Table)
                    .col(ImageData::AdvertId)
                    .name("idx_image_data_advert_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImageData::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ImageData {
    Table,
    Id,
    AdvertId,
    Name,
    ContentType,
    Data,
    CreatedDate,
}

#[derive(Iden)]
enum Adverts {
    Table,
    Id,
}
