use blizzard::model::auction::Auction;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{auction::AuctionRepository, realm::ConnectedRealmRepository},
    error::Error,
    model::{db::ConnectedRealmModel, faction::Faction},
    service::{policy::IngestPolicy, transaction::BatchTransaction},
};

/// Listing counts of one auction house snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestionReport {
    /// Listings decoded from the snapshot
    pub parsed: usize,
    /// Listings durably stored
    pub committed: usize,
}

/// Outcome of one ingestion run over every catalogued realm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub factions_ingested: usize,
    pub factions_failed: usize,
    pub parsed: usize,
    pub committed: usize,
}

impl RunReport {
    fn add(&mut self, parsed: usize, committed: usize) {
        self.parsed += parsed;
        self.committed += committed;
    }
}

pub struct AuctionService<'a> {
    db: &'a DatabaseConnection,
    client: &'a blizzard::Client,
    policy: &'a IngestPolicy,
}

impl<'a> AuctionService<'a> {
    /// Creates a new instance of [`AuctionService`]
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a blizzard::Client,
        policy: &'a IngestPolicy,
    ) -> Self {
        Self { db, client, policy }
    }

    /// Ingest every auction house of every catalogued connected realm
    ///
    /// All listings of the run share one timestamp captured before the first fetch.
    pub async fn ingest_all(&self) -> Result<RunReport, Error> {
        let realms = ConnectedRealmRepository::new(self.db).all().await?;
        let import_time = Utc::now().timestamp();

        tracing::info!(
            "Ingesting auctions of {} connected realms at {}",
            realms.len(),
            import_time
        );

        self.ingest_realms(&realms, import_time).await
    }

    /// Ingest the auction houses of `realms` in order, stamping every listing with `import_time`
    ///
    /// Factions are processed Alliance, Horde, Neutral. A faction without a snapshot reference
    /// is skipped, a failed faction is logged and the run moves on unless the error is fatal.
    pub async fn ingest_realms(
        &self,
        realms: &[ConnectedRealmModel],
        import_time: i64,
    ) -> Result<RunReport, Error> {
        let mut report = RunReport::default();

        for realm in realms {
            for faction in Faction::ALL {
                let Some(href) = faction.href(realm) else {
                    tracing::warn!(
                        "Connected realm {} ({}) has no {} auction house, skipping",
                        realm.connected_realm_id,
                        realm.name,
                        faction
                    );
                    continue;
                };

                match self.ingest_faction(realm, faction, href, import_time).await {
                    Ok(ingested) => {
                        report.factions_ingested += 1;
                        report.add(ingested.parsed, ingested.committed);
                    }
                    Err(Error::IngestionAborted {
                        parsed,
                        committed,
                        source,
                    }) => {
                        tracing::error!(
                            "Aborted {} auctions of {} after {} of {} listings: {}",
                            faction,
                            realm.name,
                            committed,
                            parsed,
                            source
                        );
                        report.factions_failed += 1;
                        report.add(parsed, committed);
                    }
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        tracing::error!(
                            "Failed to fetch {} auctions of {}: {}",
                            faction,
                            realm.name,
                            e
                        );
                        report.factions_failed += 1;
                    }
                }
            }
        }

        tracing::info!(
            "Auction ingestion finished: {} houses ingested, {} failed, {} of {} listings committed",
            report.factions_ingested,
            report.factions_failed,
            report.committed,
            report.parsed
        );

        Ok(report)
    }

    /// Fetch one auction house snapshot and persist it
    pub async fn ingest_faction(
        &self,
        realm: &ConnectedRealmModel,
        faction: Faction,
        href: &str,
        import_time: i64,
    ) -> Result<IngestionReport, Error> {
        let snapshot = self.client.auction().snapshot(href).await?;

        tracing::info!(
            "Fetched {} {} listings of {}",
            snapshot.auctions.len(),
            faction,
            realm.name
        );

        self.persist_snapshot(
            realm.connected_realm_id,
            faction,
            import_time,
            &snapshot.auctions,
        )
        .await
    }

    /// Upsert `listings` in batches of the policy's auction batch size
    ///
    /// A failed upsert rolls back the open batch and stops the snapshot, listings of earlier
    /// batches stay committed.
    ///
    /// # Returns
    /// - `Ok(IngestionReport)` - Every listing was stored
    /// - `Err(Error::IngestionAborted)` - An upsert failed, with the counts at that point
    /// - `Err(Error::DbErr)` - A transaction could not be opened or committed
    pub async fn persist_snapshot(
        &self,
        connected_realm_id: i64,
        faction: Faction,
        import_time: i64,
        listings: &[Auction],
    ) -> Result<IngestionReport, Error> {
        let parsed = listings.len();
        let mut batch = BatchTransaction::begin(self.db, self.policy.auction_batch_size).await?;

        for listing in listings {
            let result = AuctionRepository::new(batch.txn()?)
                .upsert(listing, connected_realm_id, faction, import_time)
                .await;

            if let Err(source) = result {
                let committed = batch.rollback().await?;

                return Err(Error::IngestionAborted {
                    parsed,
                    committed,
                    source,
                });
            }

            batch.record().await?;
        }

        let committed = batch.commit().await?;

        Ok(IngestionReport { parsed, committed })
    }
}

