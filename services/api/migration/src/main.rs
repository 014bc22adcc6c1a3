use sea_orm_migration::prelude::*;

mod m20260801_000001_create_accounts;
mod m20260801_000002_create_vendors;
mod m20260801_000003_create_menu_items;
mod m20260801_000004_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_accounts::Migration),
            Box::new(m20260801_000002_create_vendors::Migration),
            Box::new(m20260801_000003_create_menu_items::Migration),
            Box::new(m20260801_000004_add_lookup_indexes::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
