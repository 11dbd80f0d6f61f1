pub use sea_orm_migration::prelude::*;

mod m20250201_000001_create_base_tables;
mod m20250201_000002_create_link_tables;
mod m20250203_000001_create_indexes;
mod m20250203_000002_create_full_text_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250201_000001_create_base_tables::Migration),
            Box::new(m20250201_000002_create_link_tables::Migration),
            Box::new(m20250203_000001_create_indexes::Migration),
            Box::new(m20250203_000002_create_full_text_indexes::Migration),
        ]
    }
}
