use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(products_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await
    }
}

fn products_table() -> TableCreateStatement {
    Table::create()
        .table(Products::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Products::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(string_len(Products::Name, 150))
        .col(
            ColumnDef::new(Products::Price)
                .decimal_len(18, 2)
                .not_null(),
        )
        .col(string_len_null(Products::Description, 500))
        .col(string_len_null(Products::CategoryName, 50))
        .col(string_len_null(Products::ImageUrl, 300))
        .to_owned()
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Price,
    Description,
    CategoryName,
    ImageUrl,
}
