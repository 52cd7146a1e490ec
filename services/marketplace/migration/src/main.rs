use sea_orm_migration::prelude::*;

use quickclick_marketplace_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
