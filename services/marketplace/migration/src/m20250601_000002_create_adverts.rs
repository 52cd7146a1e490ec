use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Adverts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Adverts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Adverts::Title).string().not_null())
                    .col(ColumnDef::new(Adverts::Description).text().not_null())
                    .col(ColumnDef::new(Adverts::Category).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Adverts::Status)
                            .string_len(16)
                            .not_null()
                            .default("PUBLISHED"),
                    )
                    .col(ColumnDef::new(Adverts::Phone).string().null())
                    .col(ColumnDef::new(Adverts::Price).decimal_len(12, 2).not_null())
                    .col(
                        ColumnDef::new(Adverts::Currency)
                            .string_len(3)
                            .not_null()
                            .default("EUR"),
                    )
                    .col(ColumnDef::new(Adverts::Address).string().null())
                    .col(
                        ColumnDef::new(Adverts::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Adverts::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Adverts::ViewQuantity)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Adverts::Promoted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Adverts::Discounted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Adverts::Table, Adverts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Adverts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Adverts {
    Table,
    Id,
    Title,
    Description,
    Category,
    Status,
    Phone,
    Price,
    Currency,
    Address,
    CreatedDate,
    UserId,
    ViewQuantity,
    Promoted,
    Discounted,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
