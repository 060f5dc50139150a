pub use sea_orm_migration::prelude::*;

mod m20240405_000001_create_user_table;
mod m20240405_000002_create_car_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240405_000001_create_user_table::Migration),
            Box::new(m20240405_000002_create_car_table::Migration),
        ]
    }
}
