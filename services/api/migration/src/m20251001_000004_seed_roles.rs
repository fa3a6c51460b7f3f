use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Seed the role lookup table. Registration assigns the standard role
/// (id 3), so these rows must exist before the API serves traffic.
/// Plain inserts keep the serial sequence in step with the seeded ids.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Roles::Table)
            .columns([Roles::NombreRol])
            .values_panic(["administrador".into()])
            .values_panic(["creador".into()])
            .values_panic(["estandar".into()])
            .to_owned();
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Roles::Table)
            .and_where(
                Expr::col(Roles::NombreRol).is_in(["administrador", "creador", "estandar"]),
            )
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    NombreRol,
}
