use sea_orm::DatabaseConnection;

use crate::{
    data::realm::ConnectedRealmRepository,
    error::Error,
    model::db::ConnectedRealmModel,
    service::{
        classifier::{classify_houses, default_classifier, FactionClassifier},
        policy::IngestPolicy,
    },
};

/// Outcome of one realm catalog run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealmReport {
    /// Realms written to the catalog
    pub upserted: usize,
    /// Names the realm search returned nothing for
    pub not_found: usize,
    /// Names skipped after a fetch or decode failure
    pub failed: usize,
}

pub struct RealmService<'a> {
    db: &'a DatabaseConnection,
    client: &'a blizzard::Client,
    policy: &'a IngestPolicy,
    classifier: Box<dyn FactionClassifier>,
}

impl<'a> RealmService<'a> {
    /// Creates a new instance of [`RealmService`] using the default faction classifier
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a blizzard::Client,
        policy: &'a IngestPolicy,
    ) -> Self {
        Self {
            db,
            client,
            policy,
            classifier: Box::new(default_classifier()),
        }
    }

    pub fn with_classifier(mut self, classifier: impl FactionClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Resolve every name of a realm worklist into the connected realm catalog
    ///
    /// Names are processed in order with the policy's realm delay before each search. A failed
    /// name is logged and skipped, only authentication and persistence errors stop the run.
    pub async fn update_realms(&self, names: &[String]) -> Result<RealmReport, Error> {
        let mut report = RealmReport::default();

        for name in names {
            self.policy.pause(self.policy.realm_delay).await;

            match self.update_realm(name).await {
                Ok(Some(realm)) => {
                    tracing::info!(
                        "Catalogued {} as connected realm {}",
                        name,
                        realm.connected_realm_id
                    );
                    report.upserted += 1;
                }
                Ok(None) => {
                    tracing::warn!("No connected realm found for {}, skipping", name);
                    report.not_found += 1;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::error!("Failed to catalog realm {}: {}", name, e);
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "Realm catalog {} region: {} upserted, {} not found, {} failed",
            self.client.region(),
            report.upserted,
            report.not_found,
            report.failed
        );

        Ok(report)
    }

    /// Resolve one realm name and upsert its connected realm
    ///
    /// # Returns
    /// - `Ok(Some(ConnectedRealmModel))` - The stored connected realm
    /// - `Ok(None)` - The search returned no realm for `name`
    /// - `Err(Error)` - A fetch, decode or persistence failure
    pub async fn update_realm(&self, name: &str) -> Result<Option<ConnectedRealmModel>, Error> {
        let search = self.client.realm().search(name).await?;

        let Some(result) = search.results.first() else {
            return Ok(None);
        };

        let detail = self.client.realm().get(result.data.id).await?;
        let index = self.client.auction().index_at(&detail.auctions.href).await?;
        let houses = classify_houses(self.classifier.as_ref(), &index);

        let realm = ConnectedRealmModel {
            connected_realm_id: detail.id,
            region: self.client.region().code(),
            name: name.to_string(),
            timezone: detail.timezone().map(str::to_string),
            alliance_href: houses.alliance,
            horde_href: houses.horde,
            neutral_href: houses.neutral,
        };

        let realm = ConnectedRealmRepository::new(self.db).upsert(realm).await?;

        Ok(Some(realm))
    }
}
