use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Podcasts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Podcasts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Podcasts::Titulo).string().not_null())
                    .col(ColumnDef::new(Podcasts::Descripcion).string().not_null())
                    .col(ColumnDef::new(Podcasts::Url).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Podcasts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Podcasts {
    Table,
    Id,
    Titulo,
    Descripcion,
    Url,
}
