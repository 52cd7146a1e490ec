use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ViewedAdverts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ViewedAdverts::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ViewedAdverts::AdvertId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ViewedAdverts::ViewedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ViewedAdverts::UserId)
                            .col(ViewedAdverts::AdvertId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ViewedAdverts::Table, ViewedAdverts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ViewedAdverts::Table, ViewedAdverts::AdvertId)
                            .to(Adverts::Table, Adverts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ViewedAdverts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ViewedAdverts {
    Table,
    UserId,
    AdvertId,
    ViewedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Adverts {
    Table,
    Id,
}
