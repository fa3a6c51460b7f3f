use sea_orm_migration::prelude::*;

mod m20251001_000001_create_roles;
mod m20251001_000002_create_usuarios;
mod m20251001_000003_create_podcasts;
mod m20251001_000004_seed_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_roles::Migration),
            Box::new(m20251001_000002_create_usuarios::Migration),
            Box::new(m20251001_000003_create_podcasts::Migration),
            Box::new(m20251001_000004_seed_roles::Migration),
        ]
    }
}
