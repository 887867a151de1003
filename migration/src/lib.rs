pub use sea_orm_migration::prelude::*;

mod m20250601_000001_faction;
mod m20250601_000002_connected_realm;
mod m20250601_000003_item;
mod m20250601_000004_auction;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_faction::Migration),
            Box::new(m20250601_000002_connected_realm::Migration),
            Box::new(m20250601_000003_item::Migration),
            Box::new(m20250601_000004_auction::Migration),
        ]
    }
}
