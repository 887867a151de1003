use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250601_000001_faction::Faction, m20250601_000002_connected_realm::ConnectedRealm};

static IDX_AUCTION_LISTING_KEY: &str = "idx-auction-listing_key";
static IDX_AUCTION_ITEM_ID: &str = "idx-auction-item_id";
static FK_AUCTION_CONNECTED_REALM_ID: &str = "fk-auction-connected_realm_id";
static FK_AUCTION_FACTION_ID: &str = "fk-auction-faction_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline, SQLite cannot add them to an existing table.
        // item_id has no foreign key as items are fetched after the auctions referencing them.
        // Every upsert draws an id from the sequence on PostgreSQL, the key is 64 bits wide.
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(big_integer(Auction::Id).auto_increment().primary_key().take())
                    .col(big_integer(Auction::AuctionId))
                    .col(big_integer(Auction::Buyout))
                    .col(big_integer(Auction::Quantity))
                    .col(string(Auction::TimeLeft))
                    .col(big_integer(Auction::Timestamp))
                    .col(big_integer(Auction::ItemId))
                    .col(big_integer(Auction::ConnectedRealmId))
                    .col(integer(Auction::FactionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUCTION_CONNECTED_REALM_ID)
                            .from(Auction::Table, Auction::ConnectedRealmId)
                            .to(ConnectedRealm::Table, ConnectedRealm::ConnectedRealmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUCTION_FACTION_ID)
                            .from(Auction::Table, Auction::FactionId)
                            .to(Faction::Table, Faction::FactionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUCTION_LISTING_KEY)
                    .table(Auction::Table)
                    .col(Auction::AuctionId)
                    .col(Auction::ConnectedRealmId)
                    .col(Auction::TimeLeft)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_AUCTION_ITEM_ID)
                    .table(Auction::Table)
                    .col(Auction::ItemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUCTION_ITEM_ID)
                    .table(Auction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_AUCTION_LISTING_KEY)
                    .table(Auction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Auction {
    Table,
    Id,
    AuctionId,
    Buyout,
    Quantity,
    TimeLeft,
    Timestamp,
    ItemId,
    ConnectedRealmId,
    FactionId,
}
