use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConnectedRealm::Table)
                    .if_not_exists()
                    .col(big_integer(ConnectedRealm::ConnectedRealmId).primary_key())
                    .col(integer(ConnectedRealm::Region))
                    .col(string(ConnectedRealm::Name))
                    .col(string_null(ConnectedRealm::Timezone))
                    .col(text_null(ConnectedRealm::AllianceHref))
                    .col(text_null(ConnectedRealm::HordeHref))
                    .col(text_null(ConnectedRealm::NeutralHref))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConnectedRealm::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ConnectedRealm {
    Table,
    ConnectedRealmId,
    Region,
    Name,
    Timezone,
    AllianceHref,
    HordeHref,
    NeutralHref,
}
