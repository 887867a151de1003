use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faction::Table)
                    .if_not_exists()
                    .col(integer(Faction::FactionId).primary_key())
                    .col(string(Faction::FactionName))
                    .to_owned(),
            )
            .await?;

        // Static lookup, ids match the auction house factions
        let seed = Query::insert()
            .into_table(Faction::Table)
            .columns([Faction::FactionId, Faction::FactionName])
            .values_panic([0.into(), "Alliance".into()])
            .values_panic([1.into(), "Horde".into()])
            .values_panic([2.into(), "Neutral".into()])
            .on_conflict(OnConflict::column(Faction::FactionId).do_nothing().to_owned())
            .to_owned();

        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Faction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Faction {
    Table,
    FactionId,
    FactionName,
}
