use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Uid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Email).string())
                    .col(ColumnDef::new(Usuarios::Nombre).string())
                    .col(ColumnDef::new(Usuarios::Apellido).string())
                    .col(ColumnDef::new(Usuarios::RefreshToken).string())
                    .col(ColumnDef::new(Usuarios::IdRol).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Usuarios::Table, Usuarios::IdRol)
                            .to(Roles::Table, Roles::IdRol)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    Uid,
    Email,
    Nombre,
    Apellido,
    RefreshToken,
    IdRol,
}

#[derive(Iden)]
enum Roles {
    Table,
    IdRol,
}
