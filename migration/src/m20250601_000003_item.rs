use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(big_integer(Item::ItemId).primary_key())
                    .col(big_integer(Item::ItemClassId))
                    .col(string(Item::ItemClass))
                    .col(big_integer(Item::ItemSubclassId))
                    .col(string(Item::ItemSubclass))
                    .col(string(Item::Quality))
                    .col(string(Item::Name))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Item::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Item {
    Table,
    ItemId,
    ItemClassId,
    ItemClass,
    ItemSubclassId,
    ItemSubclass,
    Quality,
    Name,
}
