use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_adverts;
mod m20250601_000003_create_image_data;
mod m20250601_000004_create_viewed_adverts;
mod m20250601_000005_add_advert_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_adverts::Migration),
            Box::new(m20250601_000003_create_image_data::Migration),
            Box::new(m20250601_000004_create_viewed_adverts::Migration),
            Box::new(m20250601_000005_add_advert_indexes::Migration),
        ]
    }
}
